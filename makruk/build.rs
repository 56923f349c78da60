use std::path::Path;
use std::{env, io};

mod steps {
    use std::io::{self, BufWriter, Write};
    use std::{fs, path::Path};

    use makruk_base::bitboard::Bitboard;
    use makruk_base::types::Coord;

    const DIAGONALS: [(isize, isize); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

    fn generate_directed(deltas: &[(isize, isize)]) -> [Bitboard; 64] {
        let mut res = [Bitboard::EMPTY; 64];
        for c in Coord::iter() {
            let mut bb = Bitboard::EMPTY;
            for &(delta_file, delta_rank) in deltas {
                if let Some(nc) = c.shift(delta_file, delta_rank) {
                    bb.set(nc);
                }
            }
            res[c.index()] = bb;
        }
        res
    }

    fn with_forward(delta_rank: isize) -> Vec<(isize, isize)> {
        let mut res = DIAGONALS.to_vec();
        res.push((0, delta_rank));
        res
    }

    fn print_bitboards<W: Write>(w: &mut W, name: &str, bs: [Bitboard; 64]) -> io::Result<()> {
        writeln!(w, "const {}: [Bitboard; 64] = [", name)?;
        for (i, b) in bs.iter().enumerate() {
            writeln!(w, "    /*{:2}*/ bb(0x{:016x}),", i, b.as_raw())?;
        }
        writeln!(w, "];")?;
        Ok(())
    }

    pub fn gen(out_path: &Path) -> io::Result<()> {
        let f = fs::File::create(out_path)?;
        let mut w = BufWriter::new(&f);

        let tables: [(&str, Vec<(isize, isize)>); 7] = [
            (
                "KING_STEPS",
                vec![(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0), (1, 1)],
            ),
            ("COUNSELOR_STEPS", DIAGONALS.to_vec()),
            ("WHITE_NOBLE_STEPS", with_forward(-1)),
            ("BLACK_NOBLE_STEPS", with_forward(1)),
            (
                "KNIGHT_STEPS",
                vec![(-1, -2), (1, -2), (-2, -1), (2, -1), (-2, 1), (2, 1), (-1, 2), (1, 2)],
            ),
            ("WHITE_PAWN_CAPTURES", vec![(-1, -1), (1, -1)]),
            ("BLACK_PAWN_CAPTURES", vec![(-1, 1), (1, 1)]),
        ];
        for (i, (name, deltas)) in tables.iter().enumerate() {
            if i != 0 {
                writeln!(&mut w)?;
            }
            print_bitboards(&mut w, name, generate_directed(deltas))?;
        }

        Ok(())
    }
}

fn main() -> io::Result<()> {
    println!("cargo:rerun-if-changed=build.rs");

    let out_dir = env::var("OUT_DIR").unwrap();

    steps::gen(&Path::new(&out_dir).join("steps.rs"))?;

    Ok(())
}
