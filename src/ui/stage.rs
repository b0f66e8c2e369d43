/// A fixed-width, clipped stage that places each layer at a horizontal
/// offset without resizing it
///
/// Layers are drawn in push order. Only the last one receives input, so a
/// card sliding out cannot be clicked.
use iced::advanced::layout::{self, Layout};
use iced::advanced::renderer;
use iced::advanced::widget::{Tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::{event, mouse, Element, Event, Length, Point, Rectangle, Size};

pub struct Stage<'a, Message, Theme = iced::Theme, Renderer = iced::Renderer> {
    width: f32,
    children: Vec<Element<'a, Message, Theme, Renderer>>,
    offsets: Vec<f32>,
}

impl<'a, Message, Theme, Renderer> Stage<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    pub fn new(width: f32) -> Self {
        Self {
            width,
            children: Vec::new(),
            offsets: Vec::new(),
        }
    }

    /// Add a layer shifted by `offset` (positive = right)
    pub fn push(
        mut self,
        content: impl Into<Element<'a, Message, Theme, Renderer>>,
        offset: f32,
    ) -> Self {
        self.children.push(content.into());
        self.offsets.push(offset);
        self
    }
}

/// Where a layer of `size` sits inside the stage for a given offset
pub fn layer_bounds(size: Size, offset: f32) -> Rectangle {
    Rectangle::new(Point::new(offset, 0.0), size)
}

impl<'a, Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for Stage<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn size(&self) -> Size<Length> {
        Size::new(Length::Fixed(self.width), Length::Shrink)
    }

    fn children(&self) -> Vec<Tree> {
        self.children.iter().map(Tree::new).collect()
    }

    fn diff(&self, tree: &mut Tree) {
        tree.diff_children(&self.children);
    }

    fn layout(
        &self,
        tree: &mut Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let limits = limits.width(self.width);

        let nodes: Vec<layout::Node> = self
            .children
            .iter()
            .zip(tree.children.iter_mut())
            .zip(&self.offsets)
            .map(|((child, state), offset)| {
                let node = child.as_widget().layout(state, renderer, &limits);
                let bounds = layer_bounds(node.size(), *offset);
                node.move_to(bounds.position())
            })
            .collect();

        let height = nodes
            .iter()
            .map(|node| node.size().height)
            .fold(0.0, f32::max);

        layout::Node::with_children(Size::new(self.width, height), nodes)
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let Some(clip) = layout.bounds().intersection(viewport) else {
            return;
        };

        let last = self.children.len().saturating_sub(1);

        renderer.with_layer(clip, |renderer| {
            for (i, ((child, state), layout)) in self
                .children
                .iter()
                .zip(&tree.children)
                .zip(layout.children())
                .enumerate()
            {
                let cursor = if i == last {
                    cursor
                } else {
                    mouse::Cursor::Unavailable
                };
                child
                    .as_widget()
                    .draw(state, renderer, theme, style, layout, cursor, &clip);
            }
        });
    }

    fn on_event(
        &mut self,
        tree: &mut Tree,
        event: Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) -> event::Status {
        let (Some(child), Some(state), Some(layout)) = (
            self.children.last_mut(),
            tree.children.last_mut(),
            layout.children().last(),
        ) else {
            return event::Status::Ignored;
        };

        child.as_widget_mut().on_event(
            state, event, layout, cursor, renderer, clipboard, shell, viewport,
        )
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        match (
            self.children.last(),
            tree.children.last(),
            layout.children().last(),
        ) {
            (Some(child), Some(state), Some(layout)) => child
                .as_widget()
                .mouse_interaction(state, layout, cursor, viewport, renderer),
            _ => mouse::Interaction::None,
        }
    }
}

impl<'a, Message, Theme, Renderer> From<Stage<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(stage: Stage<'a, Message, Theme, Renderer>) -> Self {
        Element::new(stage)
    }
}
