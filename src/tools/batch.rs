use crate::Error;

use log::{info, warn};
use std::path::{Path, PathBuf};

/// Outcome counts of a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        return self.failed == 0;
    }
}

/// Run `op` on every input, logging exactly one outcome per file.
///
/// A failing file never stops the rest of the batch.
pub fn run_batch<I, P, F>(inputs: I, mut op: F) -> BatchReport
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
    F: FnMut(&Path) -> Result<PathBuf, Error>,
{
    let mut report = BatchReport::default();
    for input in inputs {
        let input = input.as_ref();
        match op(input) {
            Ok(output) => {
                info!("{}: wrote {}", input.display(), output.display());
                report.succeeded += 1;
            }
            Err(e) => {
                warn!("{}: {}", input.display(), e);
                report.failed += 1;
            }
        }
    }
    return report;
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::tools::*;

    const README: &[u8] = include_bytes!("../../testdata/readme.txt.applesingle");

    #[test]
    fn failures_do_not_stop_the_batch() {
        let mut files = MemoryFiles::new();
        let mut attributes = MemoryAttributes::new();
        files.insert("a.applesingle", README);
        files.insert("garbage", b"not a container at all, but long enough");
        files.insert("b.applesingle", README);

        let inputs = ["a.applesingle", "missing", "garbage", "b.applesingle"];
        let mut seen = 0;
        let report = run_batch(&inputs, |input| {
            seen += 1;
            let options = UnforkOptions {
                output: Some(input.with_extension("out")),
            };
            return unfork_file(&mut files, &mut attributes, input, &options);
        });

        assert_eq!(seen, 4);
        assert_eq!(
            report,
            BatchReport {
                succeeded: 2,
                failed: 2
            }
        );
        assert!(!report.is_success());
        assert_eq!(files.get(Path::new("b.out")), Some(&b"hi"[..]));
    }
}
