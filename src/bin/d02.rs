lib::entry!(input = "d02.txt", expect = (8, 2286), aoc2023::cubes::solve);
