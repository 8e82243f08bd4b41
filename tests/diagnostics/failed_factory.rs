use module_loader::{ ModuleRegistry, LoadError };

#[test]
fn diagnostics_failed_factory() {

	let mut registry = ModuleRegistry::<u8>::new();
	registry.register( "broken", [] as [&str; 0], | _ | Err( "boom".into() ));
	registry.register( "dependant", [ "broken" ], | _ | Ok( 1 ));
	assert!( registry.run().is_err() );
	registry.run().unwrap();

	let errors = registry.find_errors();
	assert_eq!( errors.failed, [ "broken" ]);
	assert_eq!( errors.unresolved, [ "dependant" ]);
	assert!( errors.missing.is_empty() );
	assert!( errors.cycle.is_none() );

	match registry.check_errors() {
		Err( LoadError::Unresolved( reported )) => assert_eq!( reported, errors ),
		value => panic!( "Expected Err( Unresolved ), found: {:#?}", value ),
	}

}
