//! Utilities for signatures of *entities* and *systems* in ECS.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use crate::{Component, ComponentKind, Error, Result};

/// Maximum count of component kinds which could be described by a [`Signature`].
pub const MAX_COMPONENT_KINDS: usize = Signature::BITS as usize;

/// Bitmask of component kinds.
///
/// Bit *i* is set if and only if component of kind *i* is present.
/// Entities own a signature of components they currently have,
/// systems own a signature of components they require.
///
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Signature(u32);

impl Signature {
    /// Signature without any component kinds.
    pub const EMPTY: Self = Self(0);

    /// Width of signature in bits.
    pub const BITS: u32 = u32::BITS;

    /// Creates signature from raw bitmask.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Raw bitmask of this signature.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Creates signature with the only bit of given kind set.
    ///
    /// # Errors
    ///
    /// An error is returned if kind does not fit into signature.
    ///
    pub fn of(kind: ComponentKind) -> Result<Self> {
        match 1u32.checked_shl(kind.into()) {
            Some(bits) => Ok(Self(bits)),
            None => Err(Error::KindOutOfRange(kind)),
        }
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Returns `true` if every kind of `other` is also present in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn contains_kind(self, kind: ComponentKind) -> bool {
        Self::of(kind).map_or(false, |bit| self.contains(bit))
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns iterator over all kinds present in this signature in ascending order.
    pub fn kinds(self) -> impl Iterator<Item = ComponentKind> {
        (0..Self::BITS as ComponentKind).filter(move |&kind| self.contains_kind(kind))
    }
}

impl BitOr for Signature {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl BitOrAssign for Signature {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs)
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:#034b}", self.0)
    }
}

/// Set of component types which could be required by the *system*.
///
/// Implemented for the unit type and for tuples of up to 8 components.
///
pub trait ComponentSet {
    /// Union of kinds of all components in this set.
    ///
    /// # Errors
    ///
    /// An error is returned if any kind does not fit into signature.
    ///
    fn signature() -> Result<Signature>;
}

impl ComponentSet for () {
    fn signature() -> Result<Signature> {
        Ok(Signature::EMPTY)
    }
}

macro_rules! impl_component_set {
    ($($name:ident),+) => {
        impl<$($name),+> ComponentSet for ($($name,)+)
        where
            $($name: Component,)+
        {
            fn signature() -> Result<Signature> {
                let mut signature = Signature::EMPTY;
                $(signature |= Signature::of($name::KIND)?;)+
                Ok(signature)
            }
        }
    };
}

impl_component_set!(A);
impl_component_set!(A, B);
impl_component_set!(A, B, C);
impl_component_set!(A, B, C, D);
impl_component_set!(A, B, C, D, E);
impl_component_set!(A, B, C, D, E, F);
impl_component_set!(A, B, C, D, E, F, G);
impl_component_set!(A, B, C, D, E, F, G, H);
