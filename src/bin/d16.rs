lib::entry!(input = "d16.txt", expect = (46, 51), aoc2023::beams::solve);
