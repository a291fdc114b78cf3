lib::entry!(input = "d03.txt", expect = (4361, 467835), aoc2023::schematic::solve);
