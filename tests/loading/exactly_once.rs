use crate::fixtures::Recorder ;

#[test]
fn loading_exactly_once() {

	let mut recorder = Recorder::new();
	recorder.add( "app", &[ "router", "store" ]);
	recorder.add( "router", &[ "core" ]);
	recorder.add( "store", &[ "core", "rpc" ]);
	recorder.add( "rpc", &[ "core" ]);
	recorder.add( "core", &[]);

	let started = recorder.registry.run().unwrap();
	assert_no_errors!( recorder.registry );

	// Factories require every dependency, so a single successful run means each
	// dependency was visible when its dependant ran.
	assert_eq!( started, recorder.calls() );
	assert_eq!( started.len(), 5 );
	started.iter().enumerate().for_each(| ( index, name ) | {
		assert!( !started[index + 1..].contains( name ), "{} started twice", name );
	});

	// A second run has nothing left to do.
	assert!( recorder.registry.run().unwrap().is_empty() );
	assert_eq!( recorder.calls().len(), 5 );

}
