use std::cell::Cell ;
use outcome::Outcome ;

fn parse( raw: &str ) -> Outcome<i32, String> {
	Outcome::from( raw.parse::<i32>().map_err(| _ | format!( "not a number: {}", raw )))
}

#[test]
fn collect_all_successes() {
	let collected: Outcome<Vec<i32>, String> = [ "1", "-2", "3" ].into_iter().map( parse ).collect();
	assert_eq!( collected, Outcome::ok( vec![ 1, -2, 3 ]));
}

#[test]
fn collect_empty_is_ok() {
	let collected: Outcome<Vec<i32>, String> = std::iter::empty::<Outcome<i32, String>>().collect();
	assert_eq!( collected.unwrap(), Vec::<i32>::new() );
}

#[test]
fn collect_returns_first_error_and_stops() {
	let pulled = Cell::new( 0 );
	let collected: Outcome<Vec<i32>, String> = [ "1", "x", "y", "4" ].into_iter()
		.inspect(| _ | pulled.set( pulled.get() + 1 ))
		.map( parse )
		.collect();
	assert_eq!( collected, Outcome::err( "not a number: x".to_string() ));
	assert_eq!( pulled.get(), 2 );
}
