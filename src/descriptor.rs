//! Module declaration types.
//!
//! A module is a named unit with a list of **dependencies** (other module names that
//! must have started before it) and a **factory** producing its value. Descriptors are
//! handed to a [`ModuleRegistry`]( crate::ModuleRegistry ) and never change afterwards.

use crate::lookup::Lookup ;



/// The function computing a module's value from its already started dependencies.
///
/// `FnOnce` because a factory runs at most once; the registry takes it out of the
/// descriptor when the module starts.
pub type Factory<V, E> = Box<dyn FnOnce( &Lookup<'_, V> ) -> Result<V, E> + Send>;

/// A module declaration: name, dependency names and factory.
///
/// # Example
///
/// ```
/// use module_loader::{ ModuleDescriptor, ModuleRegistry };
///
/// let mut registry = ModuleRegistry::<u32>::new();
/// registry.define(
/// 	ModuleDescriptor::new( "optional-integration", [ "maybe-absent" ], | _ | Ok( 0 ))
/// 		.ignore_missing_dependencies()
/// );
/// registry.run().unwrap();
/// assert!( registry.find_errors().is_empty() );
/// ```
#[must_use = "pass the descriptor to ModuleRegistry::define"]
pub struct ModuleDescriptor<V, E> {
	name: String,
	dependencies: Vec<String>,
	pub(crate) factory: Option<Factory<V, E>>,
	ignore_missing_dependencies: bool,
	lazy: bool,
}

impl<V, E> ModuleDescriptor<V, E> {

	/// Creates a new module declaration.
	///
	/// Dependency names are not checked here; a dependency may be registered later
	/// in the same batch.
	pub fn new<F>(
		name: impl Into<String>,
		dependencies: impl IntoIterator<Item = impl Into<String>>,
		factory: F,
	) -> Self
	where
		F: FnOnce( &Lookup<'_, V> ) -> Result<V, E> + Send + 'static,
	{
		Self {
			name: name.into(),
			dependencies: dependencies.into_iter().map( Into::into ).collect(),
			factory: Some( Box::new( factory )),
			ignore_missing_dependencies: false,
			lazy: false,
		}
	}

	/// Excludes this module from the *missing* and *unresolved* diagnostics.
	///
	/// Meant for optional integrations whose dependencies may legitimately never be
	/// registered. The module still won't start until all its dependencies have.
	pub fn ignore_missing_dependencies( mut self ) -> Self {
		self.ignore_missing_dependencies = true ;
		self
	}

	/// Marks the module as lazy.
	///
	/// A lazy module is not scheduled by itself. It starts only once a scheduled module
	/// depends on it or it is requested through [`ModuleRegistry::start`]( crate::ModuleRegistry::start ).
	pub fn lazy( mut self ) -> Self {
		self.lazy = true ;
		self
	}

	/// Unique module name.
	#[inline] pub fn name( &self ) -> &str { &self.name }

	/// Names of the modules that must start before this one.
	#[inline] pub fn dependencies( &self ) -> &[String] { &self.dependencies }

	#[inline] pub fn ignores_missing_dependencies( &self ) -> bool { self.ignore_missing_dependencies }

	#[inline] pub fn is_lazy( &self ) -> bool { self.lazy }

}

impl<V, E> std::fmt::Debug for ModuleDescriptor<V, E> {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		f.debug_struct( "ModuleDescriptor" )
			.field( "name", &self.name )
			.field( "dependencies", &self.dependencies )
			.field( "factory", &self.factory.as_ref().map(| _ | "<closure>" ))
			.field( "ignore_missing_dependencies", &self.ignore_missing_dependencies )
			.field( "lazy", &self.lazy )
			.finish()
	}
}
