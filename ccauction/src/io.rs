use clap::Args;
use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write, stdin, stdout},
    path::PathBuf,
    str::FromStr,
};

// Clearing reads a bid file and writes a report; this struct standardizes
// where those come from and go to.
#[derive(Args)]
pub struct IOArgs {
    /// The bid file ("-" implies stdin)
    #[arg(value_parser = clap::value_parser!(PathOrStd))]
    input: PathOrStd,

    /// The output file ("-" implies stdout)
    #[arg(short, long, default_value = "-", value_parser = clap::value_parser!(PathOrStd))]
    output: PathOrStd,
}

impl IOArgs {
    pub fn read(&self) -> anyhow::Result<Box<dyn BufRead>> {
        self.input.reader()
    }

    pub fn write(&self) -> anyhow::Result<Box<dyn Write>> {
        self.output.writer()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum PathOrStd {
    Path(PathBuf),
    Std,
}

impl PathOrStd {
    pub fn reader(&self) -> anyhow::Result<Box<dyn BufRead>> {
        match self {
            Self::Path(path) => Ok(Box::new(BufReader::new(File::open(path)?))),
            Self::Std => Ok(Box::new(stdin().lock())),
        }
    }

    pub fn writer(&self) -> anyhow::Result<Box<dyn Write>> {
        match self {
            Self::Path(path) => Ok(Box::new(BufWriter::new(File::create(path)?))),
            Self::Std => Ok(Box::new(stdout().lock())),
        }
    }
}

impl FromStr for PathOrStd {
    type Err = <PathBuf as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(Self::Std)
        } else {
            Ok(Self::Path(s.parse()?))
        }
    }
}
