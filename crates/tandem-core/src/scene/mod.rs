// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The render scene graph.
//!
//! A tree of nodes rooted at a container (the stage). Each node carries a
//! [`Transform2D`] relative to its parent and a [`NodeKind`] telling the
//! renderer what to draw. Children are drawn after their parent, in the
//! order they were attached.
//!
//! Nodes are never removed: entities live for the whole session.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::asset::TextureId;
use crate::math::{Affine2, LinearRgba, Rect, Transform2D, Vec2};

/// Identifies a node in a [`SceneGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

/// Stroke parameters for outlines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineStyle {
    /// Stroke width in pixels.
    pub width: f32,
    /// Where the stroke sits relative to the edge: 0 = inside, 0.5 = centered, 1 = outside.
    pub alignment: f32,
    /// Draw as a one-pixel hairline regardless of `width`.
    pub native: bool,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            width: 3.0,
            alignment: 0.0,
            native: false,
        }
    }
}

/// A textured quad anchored at a normalized point of its bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    /// Texture to draw.
    pub texture: TextureId,
    /// Normalized anchor; `(0.5, 0.5)` centers the texture on the node origin.
    pub anchor: Vec2,
}

/// A stroked rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outline {
    /// Rectangle in the node's local frame.
    pub rect: Rect,
    /// Stroke color.
    pub color: LinearRgba,
    /// Stroke parameters.
    pub line_style: LineStyle,
}

/// What a node draws.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeKind {
    /// Draws nothing; groups children.
    Container,
    /// Draws a texture.
    Sprite(Sprite),
    /// Draws a rectangle outline.
    Outline(Outline),
}

/// A single node of the graph.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    /// What to draw.
    pub kind: NodeKind,
    /// Transform relative to the parent.
    pub transform: Transform2D,
    /// Parent node, `None` for the root.
    pub parent: Option<NodeId>,
    /// Children in draw order.
    pub children: Vec<NodeId>,
}

/// Errors raised by scene graph access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    /// The id does not name a node of this graph.
    #[error("unknown scene node {0:?}")]
    UnknownNode(NodeId),
}

/// The render scene graph.
#[derive(Debug, Clone)]
pub struct SceneGraph {
    nodes: Vec<SceneNode>,
}

impl SceneGraph {
    /// Creates a graph holding only the root container.
    pub fn new() -> Self {
        Self {
            nodes: vec![SceneNode {
                kind: NodeKind::Container,
                transform: Transform2D::IDENTITY,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// The root container (the stage).
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of nodes, the root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: the root exists from creation.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Attaches a new node as the last child of `parent`.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        kind: NodeKind,
        transform: Transform2D,
    ) -> Result<NodeId, SceneError> {
        let id = NodeId(self.nodes.len() as u32);
        self.node_mut(parent)?.children.push(id);
        self.nodes.push(SceneNode {
            kind,
            transform,
            parent: Some(parent),
            children: Vec::new(),
        });
        Ok(id)
    }

    /// Borrows a node.
    pub fn node(&self, id: NodeId) -> Result<&SceneNode, SceneError> {
        self.nodes
            .get(id.0 as usize)
            .ok_or(SceneError::UnknownNode(id))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut SceneNode, SceneError> {
        self.nodes
            .get_mut(id.0 as usize)
            .ok_or(SceneError::UnknownNode(id))
    }

    /// Returns a node's local transform.
    pub fn transform(&self, id: NodeId) -> Result<Transform2D, SceneError> {
        Ok(self.node(id)?.transform)
    }

    /// Replaces a node's local transform.
    pub fn set_transform(&mut self, id: NodeId, transform: Transform2D) -> Result<(), SceneError> {
        self.node_mut(id)?.transform = transform;
        Ok(())
    }

    /// Composes the transforms from the root down to `id`.
    pub fn world_transform(&self, id: NodeId) -> Result<Affine2, SceneError> {
        let mut node = self.node(id)?;
        let mut world = node.transform.to_affine();
        while let Some(parent) = node.parent {
            node = self.node(parent)?;
            world = node.transform.to_affine() * world;
        }
        Ok(world)
    }

    /// Returns every node id in draw order (depth-first, parents first).
    pub fn draw_order(&self) -> Vec<NodeId> {
        let mut order = Vec::with_capacity(self.nodes.len());
        let mut stack = vec![self.root()];
        while let Some(id) = stack.pop() {
            order.push(id);
            if let Some(node) = self.nodes.get(id.0 as usize) {
                stack.extend(node.children.iter().rev().copied());
            }
        }
        order
    }
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}
