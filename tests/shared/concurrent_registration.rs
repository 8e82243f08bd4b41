use std::sync::{ Arc, Mutex };
use std::thread ;
use module_loader::{ SharedRegistry, ModuleRegistry };

#[test]
fn shared_concurrent_registration() {

	let registry = SharedRegistry::from( ModuleRegistry::<usize>::new().with_entry( "root" ));
	let events = Arc::new( Mutex::new( Vec::new() ));
	let sink = Arc::clone( &events );
	registry.subscribe( move | event | sink.lock().unwrap().push( event.name.to_string() ));

	let handles = ( 0..8_usize ).map(| index | {
		let registry = registry.clone();
		thread::spawn( move || {
			let name = format!( "leaf-{index}" );
			registry.register( name, [] as [&str; 0], move | _ | Ok( index ))
		})
	}).collect::<Vec<_>>();

	let leaves = ( 0..8 ).map(| index | format!( "leaf-{index}" )).collect::<Vec<_>>();
	registry.register( "root", leaves.clone(), move | lookup | {
		leaves.iter().try_fold( 0, | sum, leaf | Ok( sum + lookup.require( leaf )? ))
	});

	handles.into_iter().for_each(| handle | assert!( handle.join().unwrap() ));

	let started = registry.run().unwrap();
	assert_eq!( started.len(), 9 );
	assert_eq!( started.last().map( String::as_str ), Some( "root" ));
	assert_eq!( registry.lookup_cloned( "root" ), Some( 28 ));
	assert_eq!( registry.with_lookup( "leaf-3", | value | value * 10 ), Some( 30 ));
	assert_eq!( *events.lock().unwrap(), started );
	assert_no_errors!( registry );

}
