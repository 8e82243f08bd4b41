//! Module registration and state.
//!
//! The [`ModuleRegistry`] owns every descriptor, every produced value and the set of
//! failed modules. Registrations accumulate into a batch which the caller flushes with
//! [`ModuleRegistry::run`]; nothing executes at registration time.

use indexmap::{ IndexMap, IndexSet };

use crate::BoxError ;
use crate::descriptor::ModuleDescriptor ;
use crate::lookup::Lookup ;



/// Event delivered to [`subscribe`]( ModuleRegistry::subscribe )d listeners every time
/// a module starts.
#[derive( Debug )]
pub struct ModuleStarted<'a, V> {
	pub name: &'a str,
	pub value: &'a V,
}

pub(crate) type Listener<V> = Box<dyn FnMut( &ModuleStarted<'_, V> ) + Send>;

/// Registry of named modules and the values they produced.
///
/// # Type Parameters
/// - `V`: the value every factory produces
/// - `E`: the error a factory may fail with, [`BoxError`] by default
///
/// # Example
///
/// ```
/// use module_loader::ModuleRegistry ;
///
/// let mut registry = ModuleRegistry::<u32>::new();
/// registry.register( "b", [ "a" ], | lookup | Ok( lookup.require( "a" )? + 1 ));
/// registry.register( "a", [] as [&str; 0], | _ | Ok( 1 ));
///
/// let started = registry.run().unwrap();
/// assert_eq!( started, [ "a", "b" ]);
/// assert_eq!( registry.lookup( "b" ), Some( &2 ));
/// ```
pub struct ModuleRegistry<V, E = BoxError> {
	pub(crate) descriptors: IndexMap<String, ModuleDescriptor<V, E>>,
	pub(crate) values: IndexMap<String, V>,
	pub(crate) failed: IndexSet<String>,
	/// Modules scheduled to start: registered non-lazy modules and lazy modules that were
	/// pulled in, minus those started or failed.
	pub(crate) pending: IndexSet<String>,
	pub(crate) entry: Option<String>,
	pub(crate) listeners: Vec<Listener<V>>,
}

impl<V, E> Default for ModuleRegistry<V, E> {
	fn default() -> Self {
		Self {
			descriptors: IndexMap::new(),
			values: IndexMap::new(),
			failed: IndexSet::new(),
			pending: IndexSet::new(),
			entry: None,
			listeners: Vec::with_capacity( 0 ),
		}
	}
}

impl<V, E> ModuleRegistry<V, E> {

	pub fn new() -> Self { Self::default() }

	/// Designates the entry module.
	///
	/// When the entry module is part of a batch, its dependency closure is ordered ahead
	/// of every other module in that batch.
	pub fn with_entry( mut self, name: impl Into<String> ) -> Self {
		self.entry = Some( name.into() );
		self
	}

	pub fn set_entry( &mut self, name: Option<String> ) { self.entry = name }

	#[inline] pub fn entry( &self ) -> Option<&str> { self.entry.as_deref() }

	/// Registers a module. Shorthand for [`define`]( Self::define ) with default flags.
	pub fn register<F>(
		&mut self,
		name: impl Into<String>,
		dependencies: impl IntoIterator<Item = impl Into<String>>,
		factory: F,
	) -> bool
	where
		F: FnOnce( &Lookup<'_, V> ) -> Result<V, E> + Send + 'static,
	{
		self.define( ModuleDescriptor::new( name, dependencies, factory ))
	}

	/// Adds a module to the current batch.
	///
	/// Returns `false` without touching the registry if the name is empty or already
	/// registered; the first registration of a name wins and the rejected factory is
	/// dropped without being called.
	pub fn define( &mut self, descriptor: ModuleDescriptor<V, E> ) -> bool {

		if descriptor.name().is_empty() {
			tracing::warn!( "Rejected module registration with an empty name" );
			return false ;
		}

		if self.descriptors.contains_key( descriptor.name() ) {
			tracing::debug!( module = descriptor.name(), "Module already registered, ignoring" );
			return false ;
		}

		tracing::debug!(
			module = descriptor.name(),
			dependencies = ?descriptor.dependencies(),
			lazy = descriptor.is_lazy(),
			"Registered module",
		);

		if !descriptor.is_lazy() { self.pending.insert( descriptor.name().to_string() ); }
		self.descriptors.insert( descriptor.name().to_string(), descriptor );
		true

	}

	/// Returns the value of a started module.
	#[inline] pub fn lookup( &self, name: &str ) -> Option<&V> { self.values.get( name ) }

	#[inline] pub fn is_defined( &self, name: &str ) -> bool { self.descriptors.contains_key( name ) }

	#[inline] pub fn is_started( &self, name: &str ) -> bool { self.values.contains_key( name ) }

	#[inline] pub fn has_failed( &self, name: &str ) -> bool { self.failed.contains( name ) }

	/// Modules waiting to start, in registration order.
	pub fn pending( &self ) -> impl Iterator<Item = &str> { self.pending.iter().map( String::as_str ) }

	/// Started modules, in the order they started.
	pub fn started( &self ) -> impl Iterator<Item = &str> { self.values.keys().map( String::as_str ) }

	/// Modules whose factory failed, in the order they failed.
	pub fn failed( &self ) -> impl Iterator<Item = &str> { self.failed.iter().map( String::as_str ) }

	/// Registers a listener notified synchronously, in execution order, each time a
	/// module starts.
	pub fn subscribe( &mut self, listener: impl FnMut( &ModuleStarted<'_, V> ) + Send + 'static ) {
		self.listeners.push( Box::new( listener ));
	}

	/// Forgets every module, value and failure.
	///
	/// The entry designation and listeners are kept.
	pub fn reset( &mut self ) {
		self.descriptors.clear();
		self.values.clear();
		self.failed.clear();
		self.pending.clear();
	}

	pub(crate) fn notify_started( &mut self, name: &str ) {
		let Some( value ) = self.values.get( name ) else { return };
		let event = ModuleStarted { name, value };
		self.listeners.iter_mut().for_each(| listener | listener( &event ));
	}

}

impl<V, E> std::fmt::Debug for ModuleRegistry<V, E> {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {
		f.debug_struct( "ModuleRegistry" )
			.field( "defined", &self.descriptors.keys().collect::<Vec<_>>() )
			.field( "started", &self.values.keys().collect::<Vec<_>>() )
			.field( "failed", &self.failed )
			.field( "pending", &self.pending )
			.field( "entry", &self.entry )
			.field( "listeners", &self.listeners.len() )
			.finish()
	}
}
