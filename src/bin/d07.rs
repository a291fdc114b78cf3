lib::entry!(input = "d07.txt", expect = (6440, 5905), aoc2023::camel_cards::solve);
