use crate::fixtures::Recorder ;

#[test]
fn loading_entry_priority() {

	let mut recorder = Recorder::with_entry( "entry" );
	recorder.add( "x", &[ "y" ]);
	recorder.add( "w", &[]);
	recorder.add( "y", &[]);
	recorder.add( "entry", &[ "w" ]);

	let started = recorder.registry.run().unwrap();
	assert_eq!( started, [ "w", "entry", "y", "x" ]);

	let position = | name: &str | started.iter().position(| started | started == name ).unwrap();
	assert!( position( "w" ) < position( "x" ) && position( "w" ) < position( "y" ));
	assert!( position( "entry" ) < position( "x" ) && position( "entry" ) < position( "y" ));

}

#[test]
fn loading_without_entry_keeps_registration_order() {

	let mut recorder = Recorder::new();
	recorder.add( "x", &[ "y" ]);
	recorder.add( "w", &[]);
	recorder.add( "y", &[]);
	recorder.add( "entry", &[ "w" ]);

	assert_eq!( recorder.registry.run().unwrap(), [ "y", "x", "w", "entry" ]);

}

#[test]
fn loading_entry_not_in_batch() {

	let mut recorder = Recorder::with_entry( "absent" );
	recorder.add( "b", &[ "a" ]);
	recorder.add( "a", &[]);

	assert_eq!( recorder.registry.run().unwrap(), [ "a", "b" ]);
	assert_eq!( recorder.registry.entry(), Some( "absent" ));

}
