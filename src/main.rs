//! Demo binary: solves a few of the bundled puzzles and prints the grid
//! before and after. `RUST_LOG=trace` shows the rule passes and search
//! decisions.

use skyscrapers::City;

struct Entry {
    title: &'static str,
    size: u8,
    clues: &'static [u8],
}

const PUZZLES: &[Entry] = &[
    Entry {
        title: "4x4",
        size: 4,
        clues: &[
            2, 2, 1, 3, //
            2, 2, 3, 1, //
            1, 2, 2, 3, //
            3, 2, 1, 3,
        ],
    },
    Entry {
        title: "6x6 hard",
        size: 6,
        clues: &[
            3, 2, 2, 3, 2, 1, //
            1, 2, 3, 3, 2, 2, //
            5, 1, 2, 2, 4, 3, //
            3, 2, 1, 2, 2, 4,
        ],
    },
    Entry {
        title: "7x7 medved",
        size: 7,
        clues: &[
            3, 3, 2, 1, 2, 2, 3, //
            4, 3, 2, 4, 1, 4, 2, //
            2, 4, 1, 4, 5, 3, 2, //
            3, 1, 4, 2, 5, 2, 3,
        ],
    },
];

fn main() {
    env_logger::init();

    for entry in PUZZLES {
        let mut city = City::new(entry.size).expect("bundled size is in range");
        city.load_clues(entry.clues)
            .expect("bundled clue slice is well-formed");
        println!("Load puzzle {}", entry.title);
        println!("{}", city);
        let solved = city.solve();
        println!("{}", city);
        println!(
            "{}: {}",
            entry.title,
            if solved { "solved" } else { "not solved" }
        );
    }
}
