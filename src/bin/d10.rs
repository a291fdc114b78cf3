lib::entry!(input = "d10.txt", expect = (23, 4), aoc2023::pipe_maze::solve);
