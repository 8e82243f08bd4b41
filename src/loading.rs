//! Batch execution.
//!
//! [`ModuleRegistry::run`] flushes the current batch:
//!
//! 1. Collects pending modules in registration order, the entry module first
//! 2. Orders them depth-first so every module comes after its dependencies
//! 3. Starts each module whose dependencies have all started, passing its factory
//! 	a [`Lookup`] over the values produced so far
//! 4. Stops at the first failing factory
//!
//! Modules that could not start (missing dependency, cycle, failed dependency) stay
//! pending; [`ModuleRegistry::find_errors`] explains why.

mod topological_sort ;

use std::fmt::{ Debug, Display };
use thiserror::Error ;

use crate::diagnostics::ModuleErrors ;
use crate::lookup::Lookup ;
use crate::registry::ModuleRegistry ;
use topological_sort::topological_order ;
pub(crate) use topological_sort::roots ;



/// Errors produced while starting modules.
#[derive( Debug, Error )]
pub enum LoadError<E: Debug + Display> {

	/// A factory returned an error. The module is recorded as failed and the rest of the
	/// batch is left pending.
	#[error( "Error while loading module '{module}': {error}" )]
	FactoryFailed { module: String, error: E },

	/// A module was requested by name but never registered.
	#[error( "Unknown module: '{0}'" )]
	UnknownModule( String ),

	/// Some modules could not start. Returned by [`ModuleRegistry::check_errors`].
	#[error( "{0}" )]
	Unresolved( ModuleErrors ),

}

impl<V, E: Debug + Display> ModuleRegistry<V, E> {

	/// Starts every pending module whose dependencies can be satisfied.
	///
	/// Returns the names of the modules started by this call, in execution order.
	///
	/// # Errors
	/// Returns [`LoadError::FactoryFailed`] as soon as a factory fails. Modules started
	/// before the failure keep their values; modules after it stay pending and may be
	/// started by a later call if they don't depend on the failed one.
	pub fn run( &mut self ) -> Result<Vec<String>, LoadError<E>> {

		let order = topological_order( self );
		tracing::info!( modules = order.len(), entry = ?self.entry, "Starting module batch" );

		// Lazy modules pulled in by a dependant are part of this batch from now on.
		self.pending.extend( order.iter().cloned() );

		let mut started = Vec::with_capacity( order.len() );

		for name in order {

			let Some( descriptor ) = self.descriptors.get_mut( &name ) else { continue };
			if !descriptor.dependencies().iter().all(| dependency | self.values.contains_key( dependency )) {
				tracing::debug!( module = %name, "Dependencies not satisfied, skipping" );
				continue ;
			}
			let Some( factory ) = descriptor.factory.take() else { continue };

			self.pending.shift_remove( &name );

			match factory( &Lookup::new( &self.values )) {
				Ok( value ) => {
					tracing::debug!( module = %name, "Module started" );
					self.values.insert( name.clone(), value );
					self.notify_started( &name );
					started.push( name );
				},
				Err( error ) => {
					tracing::error!( module = %name, %error, "Module factory failed" );
					self.failed.insert( name.clone() );
					return Err( LoadError::FactoryFailed { module: name, error });
				},
			}

		}

		tracing::info!( started = started.len(), pending = self.pending.len(), "Module batch finished" );
		Ok( started )

	}

	/// Schedules a registered module, typically a lazy one, and runs the batch.
	///
	/// # Errors
	/// [`LoadError::UnknownModule`] if `name` was never registered, otherwise as [`run`]( Self::run ).
	pub fn start( &mut self, name: &str ) -> Result<Vec<String>, LoadError<E>> {

		if !self.descriptors.contains_key( name ) {
			return Err( LoadError::UnknownModule( name.to_string() ));
		}

		if !self.values.contains_key( name ) && !self.failed.contains( name ) {
			self.pending.insert( name.to_string() );
		}

		self.run()

	}

}

impl<V, E> ModuleRegistry<V, E> {

	/// The order in which [`run`]( Self::run ) would attempt the current batch.
	///
	/// Nothing is executed. Modules with unsatisfiable dependencies are included; `run`
	/// skips them.
	pub fn execution_order( &self ) -> Vec<String> { topological_order( self ) }

}
