lib::entry!(input = "d11.txt", expect = (374, 82000210), aoc2023::galaxies::solve);
