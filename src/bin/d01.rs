lib::entry!(input = "d01.txt", expect = (209, 281), aoc2023::trebuchet::solve);
