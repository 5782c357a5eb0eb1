use std::fmt ;

use crate::distinct::{ Distinct, assert_distinct };
use crate::UnwrapError ;



/// Either a success payload `T` or an error payload `E`, fixed at construction.
///
/// Build one with [`Outcome::ok`] or [`Outcome::err`]. The representation is
/// private, so once built an outcome can only be inspected or consumed into a
/// new value, never flipped in place.
///
/// `T` and `E` must be different types. Both constructors require
/// `( T, E ): Distinct<_>`, which the compiler can only satisfy for distinct
/// types; see [`Distinct`]. Every other way of building an outcome (generic
/// code, `From<Result<T, E>>`, `collect`) checks the two types when it runs and
/// panics if they are the same, before any value exists.
///
/// `Outcome<T, E>` is `Send` and `Sync` exactly when both payload types are.
#[derive( Clone, Copy, PartialEq, Eq, Hash )]
pub struct Outcome<T, E>( Repr<T, E> );

#[derive( Debug, Clone, Copy, PartialEq, Eq, Hash )]
enum Repr<T, E> {
	Ok( T ),
	Err( E ),
}

impl<T, E> Outcome<T, E> {

	#[inline]
	#[track_caller]
	fn from_repr( repr: Repr<T, E> ) -> Self {
		assert_distinct::<T, E>();
		Self( repr )
	}

	/// Creates a success-tagged outcome holding `value`.
	///
	/// ```
	/// # use outcome::Outcome ;
	/// let parsed = Outcome::<u32, String>::ok( 7 );
	/// assert!( parsed.is_ok() );
	/// ```
	#[inline]
	#[track_caller]
	pub fn ok<M>( value: T ) -> Self
	where
		( T, E ): Distinct<M>,
	{
		Self::from_repr( Repr::Ok( value ))
	}

	/// Creates an error-tagged outcome holding `error`.
	#[inline]
	#[track_caller]
	pub fn err<M>( error: E ) -> Self
	where
		( T, E ): Distinct<M>,
	{
		Self::from_repr( Repr::Err( error ))
	}

	/// Returns `true` if this holds a success payload.
	#[inline] pub fn is_ok( &self ) -> bool { matches!( self.0, Repr::Ok( _ ))}
	/// Returns `true` if this holds an error payload.
	#[inline] pub fn is_err( &self ) -> bool { matches!( self.0, Repr::Err( _ ))}

	/// Returns the success payload.
	///
	/// # Panics
	/// Panics with `"attempted to unwrap an Err"` if this holds an error payload.
	/// Use [`try_unwrap`]( Self::try_unwrap ) to get that case back as a value.
	#[track_caller]
	pub fn unwrap( self ) -> T {
		match self.try_unwrap() {
			Ok( value ) => value,
			Err( error ) => panic!( "{}", error ),
		}
	}

	/// Returns the success payload.
	///
	/// # Panics
	/// Panics with exactly `message` if this holds an error payload.
	#[track_caller]
	pub fn expect( self, message: &str ) -> T {
		match self.0 {
			Repr::Ok( value ) => value,
			Repr::Err( _ ) => panic!( "{}", message ),
		}
	}

	/// Returns the success payload, or the error payload wrapped in an
	/// [`UnwrapError`].
	///
	/// # Errors
	/// Fails if this holds an error payload.
	pub fn try_unwrap( self ) -> Result<T, UnwrapError<E>> {
		match self.0 {
			Repr::Ok( value ) => Ok( value ),
			Repr::Err( error ) => Err( UnwrapError::new( error )),
		}
	}

	/// Returns the error payload.
	///
	/// # Panics
	/// Panics with `"attempted to unwrap_err an Ok"` if this holds a success payload.
	#[track_caller]
	pub fn unwrap_err( self ) -> E {
		self.expect_err( "attempted to unwrap_err an Ok" )
	}

	/// Returns the error payload.
	///
	/// # Panics
	/// Panics with exactly `message` if this holds a success payload.
	#[track_caller]
	pub fn expect_err( self, message: &str ) -> E {
		match self.0 {
			Repr::Ok( _ ) => panic!( "{}", message ),
			Repr::Err( error ) => error,
		}
	}

	/// Returns the success payload or `default`.
	#[inline]
	pub fn unwrap_or( self, default: T ) -> T {
		match self.0 {
			Repr::Ok( value ) => value,
			Repr::Err( _ ) => default,
		}
	}

	/// Returns the success payload, or computes one from the error payload.
	#[inline]
	pub fn unwrap_or_else( self, recover: impl FnOnce( E ) -> T ) -> T {
		match self.0 {
			Repr::Ok( value ) => value,
			Repr::Err( error ) => recover( error ),
		}
	}

	/// Converts into the success payload, discarding any error.
	#[inline]
	pub fn success( self ) -> Option<T> {
		match self.0 {
			Repr::Ok( value ) => Some( value ),
			Repr::Err( _ ) => None,
		}
	}

	/// Converts into the error payload, discarding any success.
	#[inline]
	pub fn error( self ) -> Option<E> {
		match self.0 {
			Repr::Ok( _ ) => None,
			Repr::Err( error ) => Some( error ),
		}
	}

	/// Borrows both payload slots.
	#[inline]
	pub fn as_ref( &self ) -> Outcome<&T, &E> {
		Outcome::from_repr( match &self.0 {
			Repr::Ok( value ) => Repr::Ok( value ),
			Repr::Err( error ) => Repr::Err( error ),
		})
	}

	/// Feeds the success payload into the next fallible step.
	///
	/// An error payload is carried over unchanged and `next` is never called.
	/// The error type stays `E` through the whole chain.
	///
	/// ```
	/// # use outcome::Outcome ;
	/// fn halve( n: u32 ) -> Outcome<u32, String> {
	/// 	match n % 2 {
	/// 		0 => Outcome::ok( n / 2 ),
	/// 		_ => Outcome::err( format!( "{} is odd", n )),
	/// 	}
	/// }
	/// assert_eq!( Outcome::ok( 12 ).and_then( halve ).and_then( halve ), Outcome::ok( 3 ));
	/// assert_eq!( Outcome::ok( 12 ).and_then( halve ).and_then( halve ).and_then( halve ).to_string(), "Err(3 is odd)" );
	/// ```
	pub fn and_then<U, M>( self, next: impl FnOnce( T ) -> Outcome<U, E> ) -> Outcome<U, E>
	where
		( U, E ): Distinct<M>,
	{
		match self.0 {
			Repr::Ok( value ) => next( value ),
			Repr::Err( error ) => Outcome::from_repr( Repr::Err( error )),
		}
	}

	/// Feeds the error payload into a recovery step.
	///
	/// A success payload is carried over unchanged and `recover` is never
	/// called. The recovery step may itself fail with a new error type `U`.
	pub fn or_else<U, M>( self, recover: impl FnOnce( E ) -> Outcome<T, U> ) -> Outcome<T, U>
	where
		( T, U ): Distinct<M>,
	{
		match self.0 {
			Repr::Ok( value ) => Outcome::from_repr( Repr::Ok( value )),
			Repr::Err( error ) => recover( error ),
		}
	}

	/// Transforms the success payload, leaving an error payload untouched.
	pub fn map<U, M>( self, transform: impl FnOnce( T ) -> U ) -> Outcome<U, E>
	where
		( U, E ): Distinct<M>,
	{
		Outcome::from_repr( match self.0 {
			Repr::Ok( value ) => Repr::Ok( transform( value )),
			Repr::Err( error ) => Repr::Err( error ),
		})
	}

	/// Transforms the error payload, leaving a success payload untouched.
	pub fn map_err<U, M>( self, transform: impl FnOnce( E ) -> U ) -> Outcome<T, U>
	where
		( T, U ): Distinct<M>,
	{
		Outcome::from_repr( match self.0 {
			Repr::Ok( value ) => Repr::Ok( value ),
			Repr::Err( error ) => Repr::Err( transform( error )),
		})
	}

	/// Converts into a standard [`Result`].
	#[inline]
	pub fn into_result( self ) -> Result<T, E> {
		match self.0 {
			Repr::Ok( value ) => Ok( value ),
			Repr::Err( error ) => Err( error ),
		}
	}

}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
	#[track_caller]
	fn from( result: Result<T, E> ) -> Self { Self::from_repr( match result {
		Ok( value ) => Repr::Ok( value ),
		Err( error ) => Repr::Err( error ),
	})}
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
	fn from( outcome: Outcome<T, E> ) -> Self { outcome.into_result() }
}

/// Collects success payloads until the first error, which is returned instead.
/// Nothing after the first error is pulled from the iterator.
impl<A, E, V: FromIterator<A>> FromIterator<Outcome<A, E>> for Outcome<V, E> {
	#[track_caller]
	fn from_iter<I: IntoIterator<Item = Outcome<A, E>>>( iter: I ) -> Self {
		assert_distinct::<V, E>();
		iter.into_iter()
			.map( Outcome::into_result )
			.collect::<Result<V, E>>()
			.into()
	}
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
	fn fmt( &self, f: &mut fmt::Formatter<'_> ) -> fmt::Result { match &self.0 {
		Repr::Ok( value ) => write!( f, "Ok({})", value ),
		Repr::Err( error ) => write!( f, "Err({})", error ),
	}}
}

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Outcome<T, E> {
	fn fmt( &self, f: &mut fmt::Formatter<'_> ) -> fmt::Result {
		fmt::Debug::fmt( &self.0, f )
	}
}
