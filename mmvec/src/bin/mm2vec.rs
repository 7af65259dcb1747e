//! Read a vector from a Matrix Market array file and write it in the
//! PETSc-compatible binary dense-vector format.
//!
//! Usage: `mm2vec --fin <infile> --fout <outfile>`

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use mmvec::{read_market_vector_path, write_vector_path, Context, VectorBuilder};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "mm2vec",
    version,
    about = "Convert a Matrix Market array file to the PETSc binary dense-vector format"
)]
struct Cli {
    /// Input Matrix Market array file
    #[arg(long = "fin", value_name = "PATH")]
    fin: PathBuf,

    /// Output binary vector file
    #[arg(long = "fout", value_name = "PATH")]
    fout: PathBuf,
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let _context = Context::init()?;

    let parsed = read_market_vector_path(&cli.fin)
        .with_context(|| format!("reading {}", cli.fin.display()))?;

    let mut builder = VectorBuilder::with_len(parsed.rows);
    for (index, value) in parsed.values.iter().enumerate() {
        builder.set(index, *value)?;
    }
    let vector = builder.assemble();

    write_vector_path(&vector, &cli.fout)
        .with_context(|| format!("writing {}", cli.fout.display()))?;

    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    run(&Cli::parse())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_both_flags_required() {
        assert!(Cli::try_parse_from(["mm2vec"]).is_err());
        assert!(Cli::try_parse_from(["mm2vec", "--fin", "in.mtx"]).is_err());
        assert!(Cli::try_parse_from(["mm2vec", "--fout", "out.petsc"]).is_err());

        let cli =
            Cli::try_parse_from(["mm2vec", "--fin", "in.mtx", "--fout", "out.petsc"]).unwrap();
        assert_eq!(cli.fin, PathBuf::from("in.mtx"));
        assert_eq!(cli.fout, PathBuf::from("out.petsc"));
    }

    #[test]
    fn test_convert_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let fin = dir.path().join("b.mtx");
        let fout = dir.path().join("b.petsc");
        fs::write(
            &fin,
            "%%MatrixMarket matrix array real general\n3 1\n1.0\n2.5\n-3.25\n",
        )
        .unwrap();

        run(&Cli {
            fin,
            fout: fout.clone(),
        })
        .unwrap();

        let vector = mmvec::read_vector_path(&fout).unwrap();
        assert_eq!(vector.as_slice(), &[1.0, 2.5, -3.25]);
    }

    #[test]
    fn test_truncated_input_leaves_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let fin = dir.path().join("short.mtx");
        let fout = dir.path().join("short.petsc");
        fs::write(
            &fin,
            "%%MatrixMarket matrix array real general\n10 1\n1\n2\n3\n4\n5\n",
        )
        .unwrap();

        let result = run(&Cli {
            fin,
            fout: fout.clone(),
        });

        assert!(result.is_err());
        assert!(!fout.exists());
    }

    #[test]
    fn test_missing_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(&Cli {
            fin: dir.path().join("absent.mtx"),
            fout: dir.path().join("absent.petsc"),
        });
        assert!(result.is_err());
    }
}
