lib::entry!(input = "d06.txt", expect = (288, 71503), aoc2023::boat_race::solve);
