//! Runtime converter lookup for hosts that dispatch on type descriptors.
//!
//! Within Rust, `serde` already picks the right converter at compile time: the
//! `Serialize`/`Deserialize` impls in [`crate::codec`] are resolved per
//! instantiation. This module covers the other case, a host that only knows a
//! value's type at runtime (a plugin table, a message router keyed by type).
//!
//! The dispatch is closed: a [`TypeDescriptor`] is either one of the two container
//! constructors with its type arguments, or a plain type. The factory instantiates
//! a [`TaggedConverter`] for the former and refuses the latter immediately.

use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::fmt;
use std::io;
use std::marker::PhantomData;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::codec::{CodecOptions, json};
use crate::error::{KindedError, Result};
use crate::kind::ContainerKind;
use crate::optional::Optional;
use crate::outcome::Outcome;

mod private {
    pub trait Sealed {}

    impl<T> Sealed for crate::Optional<T> {}
    impl<T, E> Sealed for crate::Outcome<T, E> {}
}

/// Implemented by every instantiation of the two container constructors.
///
/// Sealed: no other type can be a container.
pub trait Container: Serialize + DeserializeOwned + Any + private::Sealed {
    /// Which constructor this type instantiates.
    const KIND: ContainerKind;

    /// Names of the concrete type arguments, in declaration order.
    fn type_arguments() -> Vec<&'static str>;
}

impl<T> Container for Optional<T>
where
    T: Serialize + DeserializeOwned + 'static,
{
    const KIND: ContainerKind = ContainerKind::Optional;

    fn type_arguments() -> Vec<&'static str> {
        vec![type_name::<T>()]
    }
}

impl<T, E> Container for Outcome<T, E>
where
    T: Serialize + DeserializeOwned + 'static,
    E: Serialize + DeserializeOwned + 'static,
{
    const KIND: ContainerKind = ContainerKind::Outcome;

    fn type_arguments() -> Vec<&'static str> {
        vec![type_name::<T>(), type_name::<E>()]
    }
}

/// A type-erased read/write contract for one container instantiation.
pub trait Converter: Send + Sync + fmt::Debug {
    /// The container constructor handled by this converter.
    fn kind(&self) -> ContainerKind;

    /// Full name of the handled type.
    fn type_name(&self) -> &'static str;

    /// Writes `value` as a tagged-union document into `sink`.
    ///
    /// # Errors
    /// [`KindedError::Configuration`] if `value` is not of the handled type.
    fn write(&self, value: &dyn Any, sink: &mut dyn io::Write) -> Result<()>;

    /// Reads a tagged-union document from `source`.
    fn read(&self, source: &mut dyn io::Read) -> Result<Box<dyn Any>>;

    /// Writes `value` into a new `String`.
    fn write_to_string(&self, value: &dyn Any) -> Result<String> {
        let mut buf = Vec::new();
        self.write(value, &mut buf)?;
        String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
    }

    /// Reads a document from a string slice.
    fn read_str(&self, text: &str) -> Result<Box<dyn Any>> {
        self.read(&mut text.as_bytes())
    }
}

/// The converter for container type `C`.
pub struct TaggedConverter<C> {
    options: CodecOptions,
    _marker: PhantomData<fn() -> C>,
}

impl<C: Container> TaggedConverter<C> {
    /// Creates a converter writing with `options`.
    pub fn new(options: CodecOptions) -> Self {
        Self {
            options,
            _marker: PhantomData,
        }
    }

    /// The options this converter writes with.
    pub fn options(&self) -> &CodecOptions {
        &self.options
    }
}

impl<C> fmt::Debug for TaggedConverter<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaggedConverter")
            .field("type", &type_name::<C>())
            .field("options", &self.options)
            .finish()
    }
}

impl<C: Container> Converter for TaggedConverter<C> {
    fn kind(&self) -> ContainerKind {
        C::KIND
    }

    fn type_name(&self) -> &'static str {
        type_name::<C>()
    }

    fn write(&self, value: &dyn Any, sink: &mut dyn io::Write) -> Result<()> {
        let container = value.downcast_ref::<C>().ok_or_else(|| {
            KindedError::Configuration(format!(
                "converter for {} was given a value of a different type",
                type_name::<C>()
            ))
        })?;
        json::to_writer_with(sink, container, &self.options)
    }

    fn read(&self, source: &mut dyn io::Read) -> Result<Box<dyn Any>> {
        let value: C = json::from_reader(source)?;
        Ok(Box::new(value))
    }
}

fn build<C: Container>(options: CodecOptions) -> Box<dyn Converter> {
    Box::new(TaggedConverter::<C>::new(options))
}

#[derive(Clone, Copy)]
enum Shape {
    Plain,
    Container {
        kind: ContainerKind,
        arguments: fn() -> Vec<&'static str>,
        build: fn(CodecOptions) -> Box<dyn Converter>,
    },
}

/// A runtime description of a type, as handed to the factory.
#[derive(Clone, Copy)]
pub struct TypeDescriptor {
    name: &'static str,
    id: TypeId,
    shape: Shape,
}

impl TypeDescriptor {
    /// Describes a container instantiation.
    pub fn of<C: Container>() -> Self {
        Self {
            name: type_name::<C>(),
            id: TypeId::of::<C>(),
            shape: Shape::Container {
                kind: C::KIND,
                arguments: C::type_arguments,
                build: build::<C>,
            },
        }
    }

    /// Describes any other type.
    pub fn plain<T: ?Sized + 'static>() -> Self {
        Self {
            name: type_name::<T>(),
            id: TypeId::of::<T>(),
            shape: Shape::Plain,
        }
    }

    /// Full type name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The described type's `TypeId`.
    pub fn type_id(&self) -> TypeId {
        self.id
    }

    /// The container constructor, or `None` for a plain type.
    pub fn container_kind(&self) -> Option<ContainerKind> {
        match self.shape {
            Shape::Container { kind, .. } => Some(kind),
            Shape::Plain => None,
        }
    }

    /// Names of the type arguments; empty for a plain type.
    pub fn type_arguments(&self) -> Vec<&'static str> {
        match self.shape {
            Shape::Container { arguments, .. } => arguments(),
            Shape::Plain => Vec::new(),
        }
    }
}

impl PartialEq for TypeDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeDescriptor {}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("name", &self.name)
            .field("kind", &self.container_kind())
            .finish()
    }
}

/// Resolves and caches converters for container types.
///
/// ```rust
/// use kinded::{Optional, factory::{ConverterFactory, TypeDescriptor}};
///
/// let mut factory = ConverterFactory::new();
/// factory.register(&TypeDescriptor::of::<Optional<i32>>())?;
///
/// let text = factory.write_value(&Optional::some(1))?;
/// assert_eq!(text, r#"{"Kind":"Some","Some":1}"#);
/// # Ok::<(), kinded::KindedError>(())
/// ```
#[derive(Debug, Default)]
pub struct ConverterFactory {
    options: CodecOptions,
    converters: HashMap<TypeId, Arc<dyn Converter>>,
}

impl ConverterFactory {
    /// A factory writing with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// A factory whose registered converters write with `options`.
    pub fn with_options(options: CodecOptions) -> Self {
        Self {
            options,
            converters: HashMap::new(),
        }
    }

    /// Options used for converters created by [`register`](Self::register).
    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    /// Returns `true` iff `ty` is an instantiation of `Optional` or `Outcome`.
    pub fn can_convert(&self, ty: &TypeDescriptor) -> bool {
        ty.container_kind().is_some()
    }

    /// Instantiates the converter for exactly the type arguments of `ty`.
    ///
    /// # Errors
    /// [`KindedError::Configuration`] naming the type if `ty` is not a container.
    pub fn create_converter(
        &self,
        ty: &TypeDescriptor,
        options: &CodecOptions,
    ) -> Result<Box<dyn Converter>> {
        match ty.shape {
            Shape::Container {
                kind,
                arguments,
                build,
            } => {
                tracing::debug!(
                    %kind,
                    type_name = ty.name,
                    arguments = ?arguments(),
                    "creating converter"
                );
                Ok(build(*options))
            }
            Shape::Plain => Err(KindedError::Configuration(format!(
                "no tagged-union converter for type {}",
                ty.name
            ))),
        }
    }

    /// Creates the converter for `ty` once and caches it.
    ///
    /// Registering the same type again returns the cached converter.
    ///
    /// # Errors
    /// Same as [`create_converter`](Self::create_converter).
    pub fn register(&mut self, ty: &TypeDescriptor) -> Result<Arc<dyn Converter>> {
        if let Some(existing) = self.converters.get(&ty.id) {
            return Ok(Arc::clone(existing));
        }

        let converter: Arc<dyn Converter> = Arc::from(self.create_converter(ty, &self.options)?);
        self.converters.insert(ty.id, Arc::clone(&converter));
        Ok(converter)
    }

    /// The cached converter for `type_id`, if registered.
    pub fn get(&self, type_id: TypeId) -> Option<Arc<dyn Converter>> {
        self.converters.get(&type_id).cloned()
    }

    /// Number of registered converters.
    pub fn len(&self) -> usize {
        self.converters.len()
    }

    /// Returns `true` if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }

    /// Writes `value` with the converter registered for its runtime type.
    ///
    /// # Errors
    /// [`KindedError::Configuration`] if no converter is registered for it.
    pub fn write_value(&self, value: &dyn Any) -> Result<String> {
        let converter = self.converters.get(&Any::type_id(value)).ok_or_else(|| {
            KindedError::Configuration("no converter registered for the value's type".into())
        })?;
        converter.write_to_string(value)
    }

    /// Reads a document as the type described by `ty`.
    ///
    /// # Errors
    /// [`KindedError::Configuration`] if `ty` has not been registered, or any
    /// codec error from the document itself.
    pub fn read_value(&self, ty: &TypeDescriptor, text: &str) -> Result<Box<dyn Any>> {
        let converter = self.converters.get(&ty.id).ok_or_else(|| {
            KindedError::Configuration(format!("no converter registered for type {}", ty.name))
        })?;
        converter.read_str(text)
    }
}
