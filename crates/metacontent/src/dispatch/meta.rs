//! Type-erased registry dispatching to registered content modules.

use std::any::Any;
use std::fmt;

use super::content::{Content, Effect, MenuOption, Position, Subscription, View};
use crate::registry::{ContentRegistry, Identifier};

/// Logged when a message is paired with another module's model.
pub const MISMATCH_ERROR: &str = "MetaContent.update msg model type mismatch";

/// The model of one content module, tagged with its name.
pub struct MultiModel {
    tag: Identifier,
    model: Box<dyn Any + Send>,
}

impl MultiModel {
    /// Wraps `model` as belonging to `content`.
    pub fn of<C: Content>(content: &C, model: C::Model) -> Self {
        Self {
            tag: Identifier::new(content.name()),
            model: Box::new(model),
        }
    }

    pub fn tag(&self) -> &Identifier {
        &self.tag
    }

    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.model.downcast_ref::<T>()
    }
}

impl fmt::Debug for MultiModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiModel").field("tag", &self.tag).finish_non_exhaustive()
    }
}

/// A message of one content module, tagged with its name.
pub struct MultiMsg {
    tag: Identifier,
    msg: Box<dyn Any + Send>,
}

impl MultiMsg {
    /// Wraps `msg` as belonging to `content`.
    pub fn of<C: Content>(content: &C, msg: C::Msg) -> Self {
        Self {
            tag: Identifier::new(content.name()),
            msg: Box::new(msg),
        }
    }

    pub fn tag(&self) -> &Identifier {
        &self.tag
    }

    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.msg.downcast_ref::<T>()
    }
}

impl fmt::Debug for MultiMsg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiMsg").field("tag", &self.tag).finish_non_exhaustive()
    }
}

/// Object-safe view of a `Content` working on tagged values.
trait ErasedContent: Send + Sync {
    fn tag(&self) -> &Identifier;
    fn menu_options(&self) -> Vec<MenuOption<MultiMsg>>;
    fn update(
        &self,
        msg: Box<dyn Any + Send>,
        model: &(dyn Any + Send),
    ) -> Option<(MultiModel, Effect<MultiMsg>)>;
    fn view_inside(&self, pos: Position, radius: f64, model: &(dyn Any + Send)) -> Option<View<MultiMsg>>;
    fn view_outside(&self, pos: Position, radius: f64, model: &(dyn Any + Send)) -> Option<View<MultiMsg>>;
    fn subscriptions(&self, model: &(dyn Any + Send)) -> Option<Subscription<MultiMsg>>;
}

struct Registered<C> {
    tag: Identifier,
    content: C,
}

impl<C: Content> Registered<C> {
    fn wrap(&self, msg: C::Msg) -> MultiMsg {
        MultiMsg {
            tag: self.tag.clone(),
            msg: Box::new(msg),
        }
    }
}

impl<C: Content> ErasedContent for Registered<C> {
    fn tag(&self) -> &Identifier {
        &self.tag
    }

    fn menu_options(&self) -> Vec<MenuOption<MultiMsg>> {
        self.content
            .menu_options()
            .into_iter()
            .map(|option| option.map(|msg| self.wrap(msg)))
            .collect()
    }

    fn update(
        &self,
        msg: Box<dyn Any + Send>,
        model: &(dyn Any + Send),
    ) -> Option<(MultiModel, Effect<MultiMsg>)> {
        let msg = msg.downcast::<C::Msg>().ok()?;
        let model = model.downcast_ref::<C::Model>()?;
        let (model, effect) = self.content.update(*msg, model);

        Some((
            MultiModel {
                tag: self.tag.clone(),
                model: Box::new(model),
            },
            effect.map(|msg| self.wrap(msg)),
        ))
    }

    fn view_inside(&self, pos: Position, radius: f64, model: &(dyn Any + Send)) -> Option<View<MultiMsg>> {
        let model = model.downcast_ref::<C::Model>()?;
        Some(
            self.content
                .view_inside(pos, radius, model)
                .map(|msg| self.wrap(msg)),
        )
    }

    fn view_outside(&self, pos: Position, radius: f64, model: &(dyn Any + Send)) -> Option<View<MultiMsg>> {
        let model = model.downcast_ref::<C::Model>()?;
        Some(
            self.content
                .view_outside(pos, radius, model)
                .map(|msg| self.wrap(msg)),
        )
    }

    fn subscriptions(&self, model: &(dyn Any + Send)) -> Option<Subscription<MultiMsg>> {
        let model = model.downcast_ref::<C::Model>()?;
        Some(self.content.subscriptions(model).map(|msg| self.wrap(msg)))
    }
}

/// Registry of content modules, kept sorted by name.
#[derive(Default)]
pub struct MetaContent {
    units: Vec<Box<dyn ErasedContent>>,
}

impl MetaContent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a content module. A module registered under an existing name
    /// replaces the earlier one.
    pub fn register<C: Content>(mut self, content: C) -> Self {
        let tag = Identifier::new(content.name());
        let unit: Box<dyn ErasedContent> = Box::new(Registered {
            tag: tag.clone(),
            content,
        });

        match self.position(&tag) {
            Ok(index) => {
                tracing::warn!(content = %tag, "replacing content registered under the same name");
                self.units[index] = unit;
            }
            Err(index) => self.units.insert(index, unit),
        }
        self
    }

    fn position(&self, tag: &Identifier) -> Result<usize, usize> {
        self.units.binary_search_by(|unit| unit.tag().cmp(tag))
    }

    fn lookup(&self, tag: &Identifier) -> Option<&dyn ErasedContent> {
        match self.position(tag) {
            Ok(index) => Some(self.units[index].as_ref()),
            Err(_) => {
                tracing::warn!(content = %tag, "no content registered under this name");
                None
            }
        }
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Registered names in dispatch order.
    pub fn names(&self) -> impl Iterator<Item = &Identifier> {
        self.units.iter().map(|unit| unit.tag())
    }

    /// The registry the code generator would produce for these modules.
    pub fn to_registry(&self) -> ContentRegistry {
        ContentRegistry::from_names(self.names().map(|tag| tag.as_str().to_string()))
    }

    /// Menu options of the module `model` belongs to.
    pub fn menu_options(&self, model: &MultiModel) -> Option<Vec<MenuOption<MultiMsg>>> {
        Some(self.lookup(&model.tag)?.menu_options())
    }

    /// Applies `msg` to `model`.
    ///
    /// Returns `None` when the message belongs to a different module than the
    /// model; the caller keeps its current model and no effect runs.
    pub fn update(&self, msg: MultiMsg, model: &MultiModel) -> Option<(MultiModel, Effect<MultiMsg>)> {
        if msg.tag != model.tag {
            tracing::warn!(msg = %msg.tag, model = %model.tag, "{}", MISMATCH_ERROR);
            return None;
        }

        let result = self.lookup(&msg.tag)?.update(msg.msg, &*model.model);
        if result.is_none() {
            tracing::warn!(content = %model.tag, "{}", MISMATCH_ERROR);
        }
        result
    }

    pub fn view_inside(&self, pos: Position, radius: f64, model: &MultiModel) -> Option<View<MultiMsg>> {
        self.lookup(&model.tag)?
            .view_inside(pos, radius, &*model.model)
    }

    pub fn view_outside(&self, pos: Position, radius: f64, model: &MultiModel) -> Option<View<MultiMsg>> {
        self.lookup(&model.tag)?
            .view_outside(pos, radius, &*model.model)
    }

    pub fn subscriptions(&self, model: &MultiModel) -> Option<Subscription<MultiMsg>> {
        self.lookup(&model.tag)?.subscriptions(&*model.model)
    }
}
