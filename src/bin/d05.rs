lib::entry!(input = "d05.txt", expect = (35, 46), aoc2023::almanac::solve);
