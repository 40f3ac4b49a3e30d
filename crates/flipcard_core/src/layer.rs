//! Layer Model
//!
//! Widgets render into a small tree of composable layers. The host owns the
//! actual drawing: a `Content` layer is an opaque region it knows how to
//! paint, and the composition layers (`Stack`, `Transform3D`) tell it where
//! and how.

use crate::geometry::{Mat4, Point, Rect};

/// Opaque handle to host-supplied content
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ContentId(pub u64);

/// Pointer event behavior
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerEvents {
    /// Normal hit testing
    #[default]
    Auto,
    /// Transparent to input
    None,
}

/// Properties common to all layers
#[derive(Clone, Debug, PartialEq)]
pub struct LayerProperties {
    /// Visibility (skips render entirely when false)
    pub visible: bool,

    /// Pointer event behavior
    pub pointer_events: PointerEvents,

    /// Optional name for debugging
    pub name: Option<String>,
}

impl Default for LayerProperties {
    fn default() -> Self {
        Self::new()
    }
}

impl LayerProperties {
    pub fn new() -> Self {
        Self {
            visible: true,
            pointer_events: PointerEvents::Auto,
            name: None,
        }
    }
}

/// A node in the render tree
#[derive(Clone, Debug, PartialEq)]
pub enum Layer {
    /// Host-rendered region
    Content {
        content: ContentId,
        bounds: Rect,
        props: LayerProperties,
    },

    /// Layers composited back to front
    Stack {
        layers: Vec<Layer>,
        props: LayerProperties,
    },

    /// 3D transform applied to a layer
    Transform3D {
        transform: Mat4,
        layer: Box<Layer>,
        props: LayerProperties,
    },

    /// Empty layer (useful as placeholder)
    Empty { props: LayerProperties },
}

impl Layer {
    /// Get the layer properties
    pub fn props(&self) -> &LayerProperties {
        match self {
            Layer::Content { props, .. } => props,
            Layer::Stack { props, .. } => props,
            Layer::Transform3D { props, .. } => props,
            Layer::Empty { props } => props,
        }
    }

    /// Get mutable layer properties
    pub fn props_mut(&mut self) -> &mut LayerProperties {
        match self {
            Layer::Content { props, .. } => props,
            Layer::Stack { props, .. } => props,
            Layer::Transform3D { props, .. } => props,
            Layer::Empty { props } => props,
        }
    }

    /// Check if the layer is visible
    pub fn is_visible(&self) -> bool {
        self.props().visible
    }

    /// Check if the layer participates in hit testing
    pub fn accepts_pointer(&self) -> bool {
        self.props().pointer_events == PointerEvents::Auto
    }

    /// Create an empty layer
    pub fn empty() -> Self {
        Layer::Empty {
            props: LayerProperties::new(),
        }
    }

    /// Create a content layer covering `bounds`
    pub fn content(content: ContentId, bounds: Rect) -> Self {
        Layer::Content {
            content,
            bounds,
            props: LayerProperties::new(),
        }
    }

    /// Create a stack of layers (first is drawn first)
    pub fn stack(layers: Vec<Layer>) -> Self {
        Layer::Stack {
            layers,
            props: LayerProperties::new(),
        }
    }

    /// Wrap this layer with a 3D transform
    pub fn with_transform_3d(self, transform: Mat4) -> Self {
        Layer::Transform3D {
            transform,
            layer: Box::new(self),
            props: LayerProperties::new(),
        }
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.props_mut().visible = visible;
        self
    }

    pub fn with_pointer_events(mut self, pointer_events: PointerEvents) -> Self {
        self.props_mut().pointer_events = pointer_events;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.props_mut().name = Some(name.into());
        self
    }

    /// Visit all direct child layers
    pub fn visit_children<F: FnMut(&Layer)>(&self, mut f: F) {
        match self {
            Layer::Stack { layers, .. } => {
                for layer in layers {
                    f(layer);
                }
            }
            Layer::Transform3D { layer, .. } => f(layer),
            _ => {}
        }
    }

    /// Find the first descendant (or self) with the given debug name
    pub fn find_named(&self, name: &str) -> Option<&Layer> {
        if self.props().name.as_deref() == Some(name) {
            return Some(self);
        }

        match self {
            Layer::Stack { layers, .. } => layers.iter().find_map(|l| l.find_named(name)),
            Layer::Transform3D { layer, .. } => layer.find_named(name),
            _ => None,
        }
    }

    /// Topmost visible, pointer-accepting content under `point`.
    ///
    /// Bounds are tested untransformed; transforms only affect how the host
    /// paints. Layers that refuse pointer events hide their whole subtree.
    pub fn hit_test(&self, point: Point) -> Option<ContentId> {
        if !self.is_visible() || !self.accepts_pointer() {
            return None;
        }

        match self {
            Layer::Content {
                content, bounds, ..
            } => bounds.contains(point).then_some(*content),
            Layer::Stack { layers, .. } => layers.iter().rev().find_map(|l| l.hit_test(point)),
            Layer::Transform3D { layer, .. } => layer.hit_test(point),
            Layer::Empty { .. } => None,
        }
    }

    /// Total number of layers in this subtree
    pub fn layer_count(&self) -> usize {
        let mut count = 1;
        self.visit_children(|child| count += child.layer_count());
        count
    }
}
