use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use quadtree::Setup;
use tracing::{info, warn};

/// only the first line of the file is read
pub fn load(path: &Path) -> Result<Setup> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let line = contents.lines().next().unwrap_or_default();
    let setup = Setup::parse(line).with_context(|| format!("parsing {}", path.display()))?;
    Ok(setup)
}

/// falls back to a single pawn on A1 if the file is missing or malformed
pub fn load_or_default(path: &Path) -> Setup {
    match load(path) {
        Ok(setup) => {
            info!(path = %path.display(), pieces = setup.len(), "loaded setup");
            setup
        }
        Err(err) => {
            warn!(path = %path.display(), "{err:#}, using the default setup");
            Setup::default()
        }
    }
}

pub fn save(path: &Path, setup: &Setup) -> Result<()> {
    fs::write(path, setup.to_line()).with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), setup = %setup, "saved setup");
    Ok(())
}

#[cfg(test)]
mod test {
    use std::fs;
    use std::path::PathBuf;

    use quadtree::Setup;

    use super::{load, load_or_default, save};

    fn temp_file(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("search-{}", std::process::id()));
        fs::create_dir_all(&dir).expect("temp dir");
        dir.join(name)
    }

    #[test]
    fn round_trip() {
        let path = temp_file("round_trip.txt");
        let setup = Setup::parse("015,230,577").expect("valid input");
        save(&path, &setup).expect("writable");
        assert_eq!("015,230,577", fs::read_to_string(&path).expect("readable"));
        assert_eq!(setup, load(&path).expect("valid file"));
    }

    #[test]
    fn first_line_only() {
        let path = temp_file("first_line.txt");
        fs::write(&path, "340,101\nnot a setup\n").expect("writable");
        assert_eq!(Setup::parse("340,101").ok(), load(&path).ok());
    }

    #[test]
    fn fallback() {
        let missing = temp_file("missing.txt");
        let _ = fs::remove_file(&missing);
        assert!(load(&missing).is_err());
        assert_eq!(Setup::default(), load_or_default(&missing));

        let malformed = temp_file("malformed.txt");
        fs::write(&malformed, "01x").expect("writable");
        let err = load(&malformed).expect_err("malformed");
        assert!(format!("{err:#}").contains("Invalid character"), "{err:#}");
        assert_eq!(Setup::default(), load_or_default(&malformed));
    }
}
