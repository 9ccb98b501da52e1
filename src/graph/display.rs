use super::Graph;
use std::fmt;

/// Writes the graph in the `v`/`e` line format of the input reader.
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (v, vlabel) in self.vlabels().iter().enumerate() {
            writeln!(f, "v {} {}", v, vlabel)?;
        }
        for (u, v, elabel) in self.edges() {
            writeln!(f, "e {} {} {}", u, v, elabel)?;
        }
        Ok(())
    }
}
