lib::entry!(input = "d08.txt", expect = (6, 6), aoc2023::wasteland::solve);
