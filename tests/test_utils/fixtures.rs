#[allow( dead_code )]
mod fixtures {

	use std::sync::{ Arc, Mutex };
	use once_cell::sync::Lazy ;
	use module_loader::ModuleRegistry ;

	static TRACING: Lazy<()> = Lazy::new(|| {
		let _ = tracing_subscriber::fmt()
			.with_max_level( tracing::Level::DEBUG )
			.with_test_writer()
			.try_init();
	});

	/// Registry of modules producing their own name. Factories record the order they
	/// ran in and require every declared dependency through the lookup.
	pub struct Recorder {
		pub registry: ModuleRegistry<String>,
		calls: Arc<Mutex<Vec<String>>>,
	}

	impl Recorder {

		pub fn new() -> Self {
			Lazy::force( &TRACING );
			Self { registry: ModuleRegistry::new(), calls: Arc::new( Mutex::new( Vec::new() ))}
		}

		pub fn with_entry( entry: &str ) -> Self {
			let Self { registry, calls } = Self::new();
			Self { registry: registry.with_entry( entry ), calls }
		}

		pub fn add( &mut self, name: &'static str, dependencies: &[&'static str] ) -> bool {
			let calls = Arc::clone( &self.calls );
			let required = dependencies.to_vec();
			self.registry.register( name, required.clone(), move | lookup | {
				calls.lock().unwrap().push( name.to_string() );
				for dependency in required {
					lookup.require( dependency )?;
				}
				Ok( name.to_string() )
			})
		}

		pub fn calls( &self ) -> Vec<String> { self.calls.lock().unwrap().clone() }

	}

}
