use std::sync::{ Arc, Mutex };
use module_loader::ModuleRegistry ;

#[test]
fn registration_reset() {

	let events = Arc::new( Mutex::new( Vec::new() ));
	let sink = Arc::clone( &events );

	let mut registry = ModuleRegistry::<u8>::new().with_entry( "main" );
	registry.subscribe( move | event | sink.lock().unwrap().push( event.name.to_string() ));
	registry.register( "main", [] as [&str; 0], | _ | Ok( 1 ));
	registry.register( "broken", [] as [&str; 0], | _ | Err( "boom".into() ));
	assert!( registry.run().is_err() );

	registry.reset();
	assert!( !registry.is_defined( "main" ));
	assert!( registry.lookup( "main" ).is_none() );
	assert!( !registry.has_failed( "broken" ));
	assert!( registry.find_errors().is_empty() );
	assert_eq!( registry.entry(), Some( "main" ));

	// Names are free again and listeners are kept.
	registry.register( "main", [] as [&str; 0], | _ | Ok( 2 ));
	registry.run().unwrap();
	assert_eq!( registry.lookup( "main" ), Some( &2 ));
	assert_eq!( *events.lock().unwrap(), [ "main", "main" ]);

}
