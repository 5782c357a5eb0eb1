use thiserror::Error ;



/// Returned by [`Outcome::try_unwrap`]( crate::Outcome::try_unwrap ) when the
/// outcome holds an error payload.
///
/// The payload is kept so the caller can still recover it. [`Outcome::unwrap`]( crate::Outcome::unwrap )
/// panics with this error's message.
#[derive( Error, Debug, Clone, PartialEq, Eq )]
#[error( "attempted to unwrap an Err" )]
pub struct UnwrapError<E>( E );

impl<E> UnwrapError<E> {

	pub(crate) fn new( error: E ) -> Self { Self( error )}

	/// Borrows the error payload that blocked the unwrap.
	#[inline] pub fn error( &self ) -> &E { &self.0 }

	/// Gives back the error payload that blocked the unwrap.
	#[inline] pub fn into_inner( self ) -> E { self.0 }

}
