lib::entry!(input = "d14.txt", expect = (136, 64), aoc2023::dish::solve);
