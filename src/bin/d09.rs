lib::entry!(input = "d09.txt", expect = (114, 2), aoc2023::mirage::solve);
