use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::encoding::decode;
use crate::error::Error;
use crate::xmlnodes::{Node, XmlNodes};

/// ## Files and streams
impl XmlNodes {
    /// Replace the children of `node` with the document read from a file.
    ///
    /// The file's encoding is detected; UTF-8 is assumed if nothing else
    /// is found. As with [`XmlNodes::from_string`], a malformed document
    /// leaves `node` without children. If the file cannot be read, `node`
    /// is left untouched.
    pub fn from_file<P: AsRef<Path>>(&mut self, node: Node, path: P) -> Result<(), Error> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|e| {
            debug!(path = %path.display(), error = %e, "cannot read document");
            e
        })?;
        let text = decode(&data)?;
        self.from_string(node, &text)?;
        Ok(())
    }

    /// Serialize `node`, including its own tag, to a file.
    ///
    /// The file is created if needed and truncated otherwise.
    pub fn to_file<P: AsRef<Path>>(&self, node: Node, path: P) -> Result<(), Error> {
        let path = path.as_ref();
        let mut file = fs::File::create(path).map_err(|e| {
            debug!(path = %path.display(), error = %e, "cannot create document");
            e
        })?;
        self.write(node, &mut file)?;
        file.flush()?;
        Ok(())
    }

    /// Write the serialized node to standard output.
    pub fn print(&self, node: Node) -> Result<(), Error> {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        self.print_to(node, &mut lock)
    }

    /// Write the serialized node to the given sink.
    pub fn print_to(&self, node: Node, w: &mut impl Write) -> Result<(), Error> {
        self.write(node, w)?;
        w.flush()?;
        Ok(())
    }
}
