#[macro_export]
macro_rules! assert_no_errors {
	( $registry:expr ) => {
		let errors = $registry.find_errors();
		if !errors.is_empty() { panic!( "Produced errors:\n{}", errors ) }
	};
}
