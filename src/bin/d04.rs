lib::entry!(input = "d04.txt", expect = (13, 30), aoc2023::scratchcards::solve);
