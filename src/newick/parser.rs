//! Single-scan Newick parser.

use crate::model::{Distance, NodeId, Tree};
use crate::newick::cursor::Cursor;
use crate::newick::error::{FormatError, FormatErrorKind};
use log::debug;

/// Bytes that end a label.
const LABEL_DELIMS: &[u8] = b":,();";
/// Bytes that end a distance field.
const DISTANCE_DELIMS: &[u8] = b",();[";
/// Characters of input shown around an error position.
const CONTEXT_WIDTH: usize = 12;

// =#========================================================================#=
// PARSER
// =#========================================================================#=
/// Parses a Newick string into a [Tree].
///
/// The parse is a single left-to-right scan maintaining a "current node"
/// cursor: `(` pushes a new child and descends, `)` pops back to the parent
/// after consuming the trailing label, distance, and bootstrap, and `,`
/// advances to the next sibling. Whitespace between tokens is skipped;
/// whitespace inside a label is part of the label.
///
/// The parse is all-or-nothing: on malformed input no partial tree is
/// returned, only a [FormatError] locating the problem.
///
/// # Example
/// ```
/// use cladograph::newick::parse_newick_str;
///
/// let tree = parse_newick_str("(ant:17,(bat:31,cow:22)mammals:7);").unwrap();
/// assert_eq!(tree.num_leaves(), 3);
/// ```
pub fn parse_newick_str(text: &str) -> Result<Tree, FormatError> {
    let mut cursor = Cursor::new(text);
    let mut tree = Tree::new();
    let mut current: Option<NodeId> = None;
    let mut done = false;

    loop {
        cursor.skip_whitespace();
        let Some(byte) = cursor.peek() else {
            return Err(error_here(&cursor, FormatErrorKind::UnexpectedEnd));
        };

        match byte {
            b'(' => {
                if done {
                    return Err(error_here(&cursor, FormatErrorKind::MissingTerminator));
                }
                cursor.bump();
                current = Some(tree.add_node(current));
            }

            b',' => {
                if current.is_none() {
                    return Err(error_here(&cursor, FormatErrorKind::UnbalancedParens));
                }
                cursor.bump();
            }

            b')' => {
                let Some(id) = current else {
                    return Err(error_here(&cursor, FormatErrorKind::UnbalancedParens));
                };
                cursor.bump();
                read_annotations(&mut cursor, &mut tree, id)?;
                current = tree[id].parent();
                if current.is_none() {
                    done = true;
                }
            }

            b';' => {
                if current.is_some() {
                    return Err(error_here(&cursor, FormatErrorKind::UnbalancedParens));
                }
                if !done {
                    return Err(error_here(&cursor, FormatErrorKind::UnexpectedEnd));
                }
                break;
            }

            _ => {
                if done {
                    return Err(error_here(&cursor, FormatErrorKind::MissingTerminator));
                }
                let id = tree.add_node(current);
                read_annotations(&mut cursor, &mut tree, id)?;
                // A bare labeled leaf is a complete (degenerate) tree.
                if current.is_none() {
                    done = true;
                }
            }
        }
    }

    debug!(
        "parsed newick tree with {} nodes ({} leaves)",
        tree.num_nodes(),
        tree.num_leaves()
    );
    Ok(tree)
}

/// Consumes the optional label, `:distance`, and `[bootstrap]` following a
/// node and records them on `id`.
fn read_annotations(
    cursor: &mut Cursor<'_>,
    tree: &mut Tree,
    id: NodeId,
) -> Result<(), FormatError> {
    let label = cursor.take_until(LABEL_DELIMS);
    if !label.is_empty() {
        tree[id].set_label(Some(label.to_string()));
    }

    if cursor.peek() != Some(b':') {
        return Ok(());
    }
    cursor.bump();

    let start = cursor.position();
    let text = cursor.take_until(DISTANCE_DELIMS);
    let value: f64 = text.parse().map_err(|_| {
        error_at(cursor, start, FormatErrorKind::InvalidDistance(text.to_string()))
    })?;
    if value < 0.0 || !value.is_finite() {
        return Err(error_at(cursor, start, FormatErrorKind::NegativeDistance(value)));
    }
    tree[id].set_distance(Some(Distance::new(value)));

    if cursor.peek() == Some(b'[') {
        cursor.bump();
        let start = cursor.position();
        let text = cursor.take_until(b"]");
        if cursor.peek() != Some(b']') {
            return Err(error_at(cursor, start, FormatErrorKind::UnterminatedBootstrap));
        }
        cursor.bump();

        let bootstrap: u32 = text.parse().map_err(|_| {
            error_at(cursor, start, FormatErrorKind::InvalidBootstrap(text.to_string()))
        })?;
        tree[id].set_bootstrap(Some(bootstrap));
    }

    Ok(())
}

fn error_here(cursor: &Cursor<'_>, kind: FormatErrorKind) -> FormatError {
    error_at(cursor, cursor.position(), kind)
}

fn error_at(cursor: &Cursor<'_>, position: usize, kind: FormatErrorKind) -> FormatError {
    FormatError::new(kind, position, cursor.context(CONTEXT_WIDTH))
}
