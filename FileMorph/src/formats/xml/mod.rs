//! XML format module
//!
//! SPDX-FileCopyrightText: 2025 `CyberDeco`
//!
//! SPDX-License-Identifier: MIT

mod element;
mod reader;
mod writer;

pub use element::XmlElement;
pub use reader::{fold, parse_element_tree, parse_xml, read_xml};
pub use writer::{ITEM_TAG, ROOT_TAG, serialize_xml, unfold, write_element_tree, write_xml};
