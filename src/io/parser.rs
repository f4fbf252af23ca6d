// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Parser for the plain-text polyhedron format
//!
//! ```text
//! <vertex count>
//! <x> <y> <z>          (one line per vertex)
//! <face count>
//! <n> <i0> ... <in-1>  (one line per face, outward winding)
//! ```
//!
//! Tokens are whitespace separated, so line breaks are not significant.
//! `#` starts a comment that runs to the end of the line.

use super::MeshData;
use anyhow::{anyhow, bail, Context, Result};
use nalgebra::Point3;
use std::str::FromStr;

/// Parse polyhedron text into raw mesh data
pub fn parse_polyhedron(source: &str) -> Result<MeshData> {
    let mut tokens = Tokens::new(source);

    let vertex_count: usize = tokens.next_value("vertex count")?;
    // Counts are untrusted; every vertex needs at least six bytes of text
    let mut vertices = Vec::with_capacity(vertex_count.min(source.len() / 6));
    for i in 0..vertex_count {
        let what = format!("coordinate of vertex {}", i);
        let x = tokens.next_value(&what)?;
        let y = tokens.next_value(&what)?;
        let z = tokens.next_value(&what)?;
        vertices.push(Point3::new(x, y, z));
    }

    let face_count: usize = tokens.next_value("face count")?;
    let mut faces = Vec::with_capacity(face_count.min(source.len() / 8));
    for i in 0..face_count {
        let n: usize = tokens.next_value(&format!("vertex count of face {}", i))?;
        let indices = (0..n)
            .map(|_| tokens.next_value(&format!("vertex index of face {}", i)))
            .collect::<Result<Vec<usize>>>()?;
        faces.push(indices);
    }

    if let Some((line, token)) = tokens.next_token() {
        bail!("Unexpected trailing token '{}' on line {}", token, line);
    }

    Ok(MeshData { vertices, faces })
}

struct Tokens<'a> {
    inner: Box<dyn Iterator<Item = (usize, &'a str)> + 'a>,
    line: usize,
}

impl<'a> Tokens<'a> {
    fn new(source: &'a str) -> Self {
        let inner = source.lines().enumerate().flat_map(|(i, line)| {
            let content = line.split('#').next().unwrap_or("");
            content.split_whitespace().map(move |tok| (i + 1, tok))
        });
        Self {
            inner: Box::new(inner),
            line: 1,
        }
    }

    fn next_token(&mut self) -> Option<(usize, &'a str)> {
        let next = self.inner.next();
        if let Some((line, _)) = next {
            self.line = line;
        }
        next
    }

    fn next_value<T>(&mut self, what: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        let (line, token) = self
            .next_token()
            .ok_or_else(|| anyhow!("Unexpected end of input after line {}: expected {}", self.line, what))?;
        token
            .parse()
            .with_context(|| format!("Invalid {} '{}' on line {}", what, token, line))
    }
}
