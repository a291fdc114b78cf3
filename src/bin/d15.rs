lib::entry!(input = "d15.txt", expect = (1320, 145), aoc2023::lens_library::solve);
