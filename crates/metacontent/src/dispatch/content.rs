//! The content contract and the message-carrying values it produces.

/// Where a content module is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An entry in the content menu; selecting it sends `msg`.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuOption<M> {
    pub label: String,
    pub msg: M,
}

impl<M> MenuOption<M> {
    pub fn new(label: impl Into<String>, msg: M) -> Self {
        Self {
            label: label.into(),
            msg,
        }
    }

    pub fn map<N>(self, f: impl Fn(M) -> N) -> MenuOption<N> {
        MenuOption {
            label: self.label,
            msg: f(self.msg),
        }
    }
}

/// Follow-up work requested by `update`, as the messages it will produce.
#[derive(Debug, Clone, PartialEq)]
pub struct Effect<M> {
    messages: Vec<M>,
}

impl<M> Effect<M> {
    pub fn none() -> Self {
        Self { messages: Vec::new() }
    }

    pub fn message(msg: M) -> Self {
        Self { messages: vec![msg] }
    }

    pub fn batch(messages: Vec<M>) -> Self {
        Self { messages }
    }

    pub fn is_none(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn messages(&self) -> &[M] {
        &self.messages
    }

    pub fn into_messages(self) -> Vec<M> {
        self.messages
    }

    pub fn map<N>(self, f: impl Fn(M) -> N) -> Effect<N> {
        Effect {
            messages: self.messages.into_iter().map(f).collect(),
        }
    }
}

/// Rendered markup plus the messages its event handlers send.
#[derive(Debug, Clone, PartialEq)]
pub struct View<M> {
    pub markup: String,
    pub handlers: Vec<(String, M)>,
}

impl<M> View<M> {
    pub fn new(markup: impl Into<String>) -> Self {
        Self {
            markup: markup.into(),
            handlers: Vec::new(),
        }
    }

    /// Attaches a handler sending `msg` when `event` fires.
    pub fn on(mut self, event: impl Into<String>, msg: M) -> Self {
        self.handlers.push((event.into(), msg));
        self
    }

    pub fn map<N>(self, f: impl Fn(M) -> N) -> View<N> {
        View {
            markup: self.markup,
            handlers: self
                .handlers
                .into_iter()
                .map(|(event, msg)| (event, f(msg)))
                .collect(),
        }
    }
}

/// External event sources a content module listens to.
#[derive(Debug, Clone, PartialEq)]
pub struct Subscription<M> {
    pub sources: Vec<(String, M)>,
}

impl<M> Subscription<M> {
    pub fn none() -> Self {
        Self { sources: Vec::new() }
    }

    pub fn on(source: impl Into<String>, msg: M) -> Self {
        Self {
            sources: vec![(source.into(), msg)],
        }
    }

    pub fn is_none(&self) -> bool {
        self.sources.is_empty()
    }

    pub fn map<N>(self, f: impl Fn(M) -> N) -> Subscription<N> {
        Subscription {
            sources: self
                .sources
                .into_iter()
                .map(|(source, msg)| (source, f(msg)))
                .collect(),
        }
    }
}

/// The operations every content module provides.
pub trait Content: Send + Sync + 'static {
    type Model: Send + 'static;
    type Msg: Send + 'static;

    /// Name the module is registered and tagged under.
    fn name(&self) -> &str;

    fn menu_options(&self) -> Vec<MenuOption<Self::Msg>>;

    fn update(&self, msg: Self::Msg, model: &Self::Model) -> (Self::Model, Effect<Self::Msg>);

    fn view_inside(&self, pos: Position, radius: f64, model: &Self::Model) -> View<Self::Msg>;

    fn view_outside(&self, pos: Position, radius: f64, model: &Self::Model) -> View<Self::Msg>;

    fn subscriptions(&self, _model: &Self::Model) -> Subscription<Self::Msg> {
        Subscription::none()
    }
}
