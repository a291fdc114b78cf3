lib::entry!(input = "d13.txt", expect = (405, 400), aoc2023::mirrors::solve);
