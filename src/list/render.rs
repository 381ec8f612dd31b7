//! Text rendering of lists
//!
//! - [`render`]: one-line `["a" <-> NULL <-> "c"]` view of the payloads
//! - [`render_links`]: one line per node with its handle and both links, for debugging

use super::DoubleLinkedList;
use crate::memory::NodeId;
use std::fmt;

const SEPARATOR: &str = " <-> ";

/// Format a payload, quoting text and spelling a missing payload `NULL`
fn format_data(data: Option<&str>) -> String {
    match data {
        Some(text) => format!("{:?}", text),
        None => "NULL".to_string(),
    }
}

fn format_link(link: Option<NodeId>) -> String {
    match link {
        Some(id) => id.to_string(),
        None => "NULL".to_string(),
    }
}

/// Render the payloads in link order
pub fn render(list: &DoubleLinkedList) -> String {
    let mut s = String::from("[");
    for (i, (_, data)) in list.iter().enumerate() {
        if i > 0 {
            s.push_str(SEPARATOR);
        }
        s.push_str(&format_data(data));
    }
    s.push(']');
    s
}

/// Render every node with its links, front to back
pub fn render_links(list: &DoubleLinkedList) -> String {
    let mut s = format!(
        "first={} last={} len={}\n",
        format_link(list.first()),
        format_link(list.last()),
        list.len()
    );
    for (id, data) in list.iter() {
        let (prev, next) = match list.node(id) {
            Ok(node) => (node.prev(), node.next()),
            Err(_) => (None, None),
        };
        s.push_str(&format!(
            "{} prev={} next={} data={}\n",
            id,
            format_link(prev),
            format_link(next),
            format_data(data)
        ));
    }
    s
}

impl fmt::Display for DoubleLinkedList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}
