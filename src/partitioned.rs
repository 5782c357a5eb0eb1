//! Splitting many outcomes without stopping at the first error.
//!
//! Collecting into an [`Outcome`] gives up on the first error. Sometimes every
//! step should still run, with the failures reported alongside whatever did
//! succeed; [`Partitioned`] keeps both sides.

use itertools::{ Either, Itertools };

use crate::Outcome ;



/// Success and error payloads of a batch of outcomes, each side in the order
/// it was produced.
///
/// ```
/// # use outcome::{ Outcome, Partitioned };
/// let batch: Partitioned<u8, String> = [ "1", "x", "3" ].into_iter()
/// 	.map(| raw | Outcome::from( raw.parse::<u8>().map_err(| err | err.to_string() )))
/// 	.collect();
/// assert_eq!( batch.successful(), &[ 1, 3 ]);
/// assert_eq!( batch.failed().len(), 1 );
/// ```
#[derive( Debug, Clone, PartialEq, Eq )]
pub struct Partitioned<T, E> {
	successful: Vec<T>,
	failed: Vec<E>,
}

impl<T, E> Partitioned<T, E> {

	/// Success payloads, in order.
	#[inline] pub fn successful( &self ) -> &[T] { &self.successful }
	/// Error payloads, in order.
	#[inline] pub fn failed( &self ) -> &[E] { &self.failed }
	/// Returns `true` if nothing failed.
	#[inline] pub fn is_complete( &self ) -> bool { self.failed.is_empty() }
	/// Splits into the success and error payloads.
	pub fn deconstruct( self ) -> ( Vec<T>, Vec<E> ) {( self.successful, self.failed )}

}

impl<T, E> Default for Partitioned<T, E> {
	fn default() -> Self { Self { successful: Vec::new(), failed: Vec::new() }}
}

impl<T, E> FromIterator<Outcome<T, E>> for Partitioned<T, E> {
	fn from_iter<I: IntoIterator<Item = Outcome<T, E>>>( iter: I ) -> Self {
		let ( successful, failed ) = iter.into_iter().partition_map(| outcome | match outcome.into_result() {
			Ok( value ) => Either::Left( value ),
			Err( error ) => Either::Right( error ),
		});
		Self { successful, failed }
	}
}
