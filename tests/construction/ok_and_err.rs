use outcome::Outcome ;

#[test]
fn ok_is_ok_and_not_err() {
	for value in [ i32::MIN, -1, 0, 1, i32::MAX ] {
		let outcome = Outcome::<i32, String>::ok( value );
		assert!( outcome.is_ok() );
		assert!( !outcome.is_err() );
	}
}

#[test]
fn err_is_err_and_not_ok() {
	for error in [ "", "bad", "disk full" ] {
		let outcome = Outcome::<i32, &str>::err( error );
		assert!( outcome.is_err() );
		assert!( !outcome.is_ok() );
	}
}

#[test]
fn repeated_inspection_is_stable() {
	let outcome = Outcome::<Vec<u8>, String>::ok( vec![ 1, 2, 3 ]);
	for _ in 0..3 {
		assert!( outcome.is_ok() );
		assert_eq!( outcome.clone().unwrap(), vec![ 1, 2, 3 ]);
	}
}

#[test]
fn same_instance_reads_back_unchanged() {
	let success = Outcome::<Vec<u8>, String>::ok( vec![ 1, 2, 3 ]);
	let failure = Outcome::<Vec<u8>, String>::err( "bad".into() );
	for _ in 0..3 {
		assert!( success.is_ok() && !success.is_err() );
		assert_eq!( success.as_ref().unwrap(), &vec![ 1, 2, 3 ]);
		assert!( failure.is_err() && !failure.is_ok() );
		assert_eq!( failure.as_ref().unwrap_err(), "bad" );
	}
	assert_eq!( success.unwrap(), vec![ 1, 2, 3 ]);
	assert_eq!( failure.unwrap_err(), "bad" );
}

#[test]
fn payloads_come_back_on_their_own_side() {
	assert_eq!( Outcome::<u8, char>::ok( 4 ).success(), Some( 4 ));
	assert_eq!( Outcome::<u8, char>::ok( 4 ).error(), None );
	assert_eq!( Outcome::<u8, char>::err( 'x' ).success(), None );
	assert_eq!( Outcome::<u8, char>::err( 'x' ).error(), Some( 'x' ));
}

#[test]
fn as_ref_borrows_without_consuming() {
	let outcome = Outcome::<String, u16>::ok( "kept".to_string() );
	assert_eq!( outcome.as_ref().unwrap(), "kept" );
	assert_eq!( outcome.unwrap(), "kept" );
}

#[test]
fn debug_shows_the_tag() {
	assert_eq!( format!( "{:?}", Outcome::<u8, &str>::ok( 5 )), "Ok(5)" );
	assert_eq!( format!( "{:?}", Outcome::<u8, &str>::err( "bad" )), "Err(\"bad\")" );
}
