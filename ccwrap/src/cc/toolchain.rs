use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};


// Family of the real compiler, guessed from its path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolFamily {
    Gnu,
    Clang,
    Unknown,
}

impl ToolFamily {
    // Anywhere in the path counts, so `/opt/llvm/bin/cc` is not Clang
    // but `/opt/clang-15/bin/cc` is.
    pub fn detect(path: &Path) -> Self {
        let path = path.to_string_lossy();
        if path.contains("clang") {
            Self::Clang
        } else if path.contains("gcc") || path.contains("g++") {
            Self::Gnu
        } else {
            Self::Unknown
        }
    }

    // Flags appended to every non-probe invocation of this family
    pub fn extra_flags(self) -> &'static [&'static str] {
        match self {
            // -fno-limit-debug-info keeps STL types in the debug info
            Self::Clang => &[
                "-fno-limit-debug-info",
                "-Wthread-safety",
                "-Wgnu-conditional-omitted-operand",
            ],
            // Not understood by clang, so only ever added for gcc
            Self::Gnu => &["-Wno-maybe-uninitialized"],
            Self::Unknown => &[],
        }
    }
}


/// Find an executable on `PATH`, passing over any candidate that is the same
/// file as `skip`.
///
/// `skip` is the running wrapper: installed as `cc`, the first `cc` on `PATH`
/// is usually the wrapper itself.
pub fn which(exe: impl AsRef<Path>, skip: Option<&Path>) -> Option<PathBuf> {
    let path_entries = std::env::var_os("PATH").unwrap_or_default();
    which_in(exe.as_ref(), &path_entries, skip)
}

fn which_in(exe: &Path, path_entries: &OsStr, skip: Option<&Path>) -> Option<PathBuf> {
    let usable = |path: &Path| match skip {
        Some(skip) => !same_file(path, skip),
        None => true,
    };

    // If |tool| is not just one "word," assume it's an actual path...
    if exe.components().count() > 1 {
        let path = PathBuf::from(exe);
        if path.exists() && usable(&path) {
            return Some(path);
        }
        return None;
    }

    // Loop through PATH entries searching for the |tool|.
    std::env::split_paths(path_entries).find_map(|path_entry| {
        let mut path = path_entry.join(exe);
        if !std::env::consts::EXE_EXTENSION.is_empty() {
            path.set_extension(std::env::consts::EXE_EXTENSION);
        }
        if path.is_file() && usable(&path) {
            return Some(path)
        }
        None
    })
}

// Same canonical path, or (on unix) the same inode, which also catches hard links
fn same_file(a: &Path, b: &Path) -> bool {
    if let (Ok(ca), Ok(cb)) = (a.canonicalize(), b.canonicalize()) {
        if ca == cb {
            return true;
        }
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;
        if let (Ok(ma), Ok(mb)) = (fs::metadata(a), fs::metadata(b)) {
            return ma.dev() == mb.dev() && ma.ino() == mb.ino();
        }
    }
    false
}
