lib::entry!(input = "d12.txt", expect = (21, 525152), aoc2023::springs::solve);
