//! A success-or-error value type.
//!
//! [`Outcome<T, E>`]( Outcome ) holds exactly one of a success payload `T` or an
//! error payload `E`. The variant is fixed when the value is built and the two
//! payload types must differ, which the compiler checks at every construction
//! site.
//!
//! # Core Concepts
//!
//! - [`Outcome`]: The value itself. Built with [`Outcome::ok`] or [`Outcome::err`],
//! 	inspected with [`is_ok`]( Outcome::is_ok ) / [`is_err`]( Outcome::is_err ),
//! 	consumed with [`unwrap`]( Outcome::unwrap ), [`expect`]( Outcome::expect ) or
//! 	one of the combinators.
//!
//! - [`Distinct`]: The bound that makes `Outcome<T, T>` unconstructible.
//!
//! - [`UnwrapError`]: What [`try_unwrap`]( Outcome::try_unwrap ) returns instead of
//! 	panicking. Its message is the one [`unwrap`]( Outcome::unwrap ) panics with.
//!
//! - [`Partitioned`]: Many outcomes split into their successes and failures.
//!
//! # Example
//!
//! ```
//! use outcome::Outcome ;
//!
//! fn parse( raw: &str ) -> Outcome<i64, String> {
//! 	match raw.trim().parse() {
//! 		Ok( value ) => Outcome::ok( value ),
//! 		Err( _ ) => Outcome::err( format!( "not a number: {:?}", raw )),
//! 	}
//! }
//!
//! fn non_negative( value: i64 ) -> Outcome<u64, String> {
//! 	match u64::try_from( value ) {
//! 		Ok( value ) => Outcome::ok( value ),
//! 		Err( _ ) => Outcome::err( format!( "{} is negative", value )),
//! 	}
//! }
//!
//! // `and_then` only runs the next step on success.
//! let good = parse( " 42 " ).and_then( non_negative );
//! assert_eq!( good.to_string(), "Ok(42)" );
//!
//! let bad = parse( "-3" ).and_then( non_negative );
//! assert_eq!( bad.to_string(), "Err(-3 is negative)" );
//!
//! // `or_else` only runs the recovery step on error, and may change the error type.
//! let recovered: Outcome<u64, &str> = bad.or_else(| _ | Outcome::ok( 0 ));
//! assert_eq!( recovered.unwrap(), 0 );
//! ```
//!
//! # Misuse Is a Panic
//!
//! Unwrapping the wrong side is a programmer error rather than a domain error,
//! so [`unwrap`]( Outcome::unwrap ) and [`expect`]( Outcome::expect ) panic:
//!
//! ```should_panic
//! # use outcome::Outcome ;
//! let missing: Outcome<u8, String> = Outcome::err( "no config".into() );
//! missing.expect( "config must be loaded before startup" );
//! ```
//!
//! # Same Payload Types
//!
//! An outcome whose success and error types coincide cannot be built:
//!
//! ```compile_fail
//! # use outcome::Outcome ;
//! let ambiguous = Outcome::<String, String>::ok( "which one?".to_string() );
//! ```
//!
//! Use a newtype for one side instead. Inside generic code the compiler cannot
//! see through type parameters, and conversions such as `From<Result<T, E>>`
//! cannot carry the bound, so those paths repeat the check by type identity
//! when the value is built and panic if the two types turn out equal.

mod distinct ;
mod outcome ;
mod partitioned ;
mod unwrap_error ;

pub use distinct::Distinct ;
pub use outcome::Outcome ;
pub use partitioned::Partitioned ;
pub use unwrap_error::UnwrapError ;
