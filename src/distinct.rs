//! Compile-time proof that two types differ.
//!
//! Rust has no negative trait bounds, so `T != E` is expressed through
//! ambiguity instead: [`Distinct`] is implemented for every pair under one
//! marker and for every pair of identical types under a second marker. For a
//! pair of different types only the first impl applies and the marker is
//! inferred. For identical types both apply, inference fails, and the caller
//! gets a compile error.
//!
//! The markers live in a private module so they cannot be named, which means
//! the ambiguity cannot be resolved by hand with a turbofish.

/// Implemented for `( A, B )` in a way that is only usable when `A` and `B`
/// are different types.
///
/// Used as `where ( T, E ): Distinct<M>` with `M` left to inference. The
/// marker parameter carries no meaning of its own.
pub trait Distinct<Marker> {}

impl<A, B> Distinct<markers::Different> for ( A, B ) {}
impl<A> Distinct<markers::Same> for ( A, A ) {}

#[allow( clippy::empty_enum )]
mod markers {
	pub enum Different {}
	pub enum Same {}
}

/// Construction-time check for every path the bound above cannot see.
///
/// Inside a generic function the compiler treats distinct type parameters as
/// distinct types, so `( A, B ): Distinct<_>` resolves even if a caller later
/// instantiates `A = B`. Conversions such as `From<Result<T, E>>` cannot carry
/// the bound at all. Both end up here, in every build profile.
///
/// # Panics
/// Panics if `A` and `B` are the same type.
#[inline]
#[track_caller]
pub(crate) fn assert_distinct<A: ?Sized, B: ?Sized>() {
	assert!(
		typeid::of::<A>() != typeid::of::<B>(),
		"Outcome success and error types must differ, both are `{}`",
		std::any::type_name::<A>(),
	);
}
