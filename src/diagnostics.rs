//! Read-only analysis of modules that did not start.

use std::collections::HashMap ;
use std::fmt::{ Debug, Display };
use itertools::Itertools ;
use nonempty_collections::NEVec ;

use crate::loading::{ LoadError, roots };
use crate::registry::ModuleRegistry ;



/// Why some modules have not started.
///
/// Produced by [`ModuleRegistry::find_errors`]. The `Display` implementation renders a
/// report meant for developers, one section per non-empty category.
#[derive( Debug, Clone, PartialEq, Eq, Default )]
pub struct ModuleErrors {
	/// Modules whose factory failed, in the order they failed.
	pub failed: Vec<String>,
	/// The first dependency cycle found, starting and ending with the same module.
	pub cycle: Option<NEVec<String>>,
	/// Dependencies referenced by pending modules that were never registered.
	pub missing: Vec<String>,
	/// Pending modules that neither started nor failed.
	pub unresolved: Vec<String>,
}

impl ModuleErrors {

	pub fn is_empty( &self ) -> bool {
		self.failed.is_empty() && self.cycle.is_none() && self.missing.is_empty() && self.unresolved.is_empty()
	}

	/// The cycle as a list of names, e.g. `["a", "b", "a"]`.
	pub fn cycle_names( &self ) -> Option<Vec<&str>> {
		self.cycle.as_ref().map(| cycle | cycle.into_iter().map( String::as_str ).collect() )
	}

}

impl Display for ModuleErrors {
	fn fmt( &self, f: &mut std::fmt::Formatter<'_> ) -> std::fmt::Result {

		let mut sections = Vec::with_capacity( 4 );

		if !self.missing.is_empty() {
			sections.push( format!(
				"The following modules are needed by other modules but have not been defined:\n{}",
				self.missing.iter().map(| name | format!( "  - {name}" )).join( "\n" ),
			));
		}

		if let Some( cycle ) = &self.cycle {
			sections.push( format!(
				"The following modules could not be loaded because they form a dependency cycle:\n  {}",
				cycle.into_iter().join( " => " ),
			));
		}

		if !self.unresolved.is_empty() {
			sections.push( format!(
				"The following modules could not be loaded because they have unmet dependencies, \
				this is a secondary error which is likely caused by one of the above problems:\n{}",
				self.unresolved.iter().map(| name | format!( "  - {name}" )).join( "\n" ),
			));
		}

		if !self.failed.is_empty() {
			sections.push( format!(
				"The following modules failed to load because of an error:\n{}",
				self.failed.iter().map(| name | format!( "  - {name}" )).join( "\n" ),
			));
		}

		write!( f, "{}", sections.join( "\n\n" ))

	}
}

#[derive( Clone, Copy, PartialEq, Eq )]
enum VisitState {
	Visiting,
	Visited,
}

impl<V, E> ModuleRegistry<V, E> {

	/// Explains why pending modules have not started. Does not modify the registry.
	///
	/// Modules flagged with
	/// [`ignore_missing_dependencies`]( crate::ModuleDescriptor::ignore_missing_dependencies )
	/// are left out of `missing` and `unresolved`.
	pub fn find_errors( &self ) -> ModuleErrors {

		let reported = move || self.pending.iter()
			.filter_map( move | name | self.descriptors.get( name ))
			.filter(| descriptor | !descriptor.ignores_missing_dependencies() );

		let missing = reported()
			.flat_map(| descriptor | descriptor.dependencies() )
			.filter(| dependency | !self.descriptors.contains_key( dependency.as_str() ))
			.unique()
			.cloned()
			.collect();

		let unresolved = reported()
			.map(| descriptor | descriptor.name().to_string() )
			.collect();

		ModuleErrors {
			failed: self.failed.iter().cloned().collect(),
			cycle: self.find_cycle(),
			missing,
			unresolved,
		}

	}

	fn find_cycle( &self ) -> Option<NEVec<String>> {

		let mut states = HashMap::with_capacity( self.pending.len() );
		let mut stack = Vec::new();

		roots( self ).find_map(| root | self.visit_for_cycle( root, &mut states, &mut stack ))

	}

	fn visit_for_cycle<'a>(
		&'a self,
		name: &'a str,
		states: &mut HashMap<&'a str, VisitState>,
		stack: &mut Vec<&'a str>,
	) -> Option<NEVec<String>> {

		match states.get( name ) {
			Some( VisitState::Visited ) => return None,
			Some( VisitState::Visiting ) => {
				let start = stack.iter().position(| entry | *entry == name )?;
				let mut cycle = NEVec::new( name.to_string() );
				stack[start + 1..].iter().for_each(| entry | cycle.push( entry.to_string() ));
				cycle.push( name.to_string() );
				return Some( cycle );
			},
			None => {},
		}

		states.insert( name, VisitState::Visiting );
		stack.push( name );

		let cycle = self.descriptors.get( name ).and_then(| descriptor | descriptor.dependencies().iter()
			.map( String::as_str )
			.filter(| dependency | self.descriptors.contains_key( *dependency ))
			.filter(| dependency | !self.values.contains_key( *dependency ))
			.filter(| dependency | !self.failed.contains( *dependency ))
			.find_map(| dependency | self.visit_for_cycle( dependency, states, stack ))
		);

		if cycle.is_none() {
			stack.pop();
			states.insert( name, VisitState::Visited );
		}

		cycle

	}

}

impl<V, E: Debug + Display> ModuleRegistry<V, E> {

	/// Fails with [`LoadError::Unresolved`] if [`find_errors`]( Self::find_errors ) reports anything.
	///
	/// # Errors
	/// See above. The report is also logged at `warn` level.
	pub fn check_errors( &self ) -> Result<(), LoadError<E>> {
		let errors = self.find_errors();
		if errors.is_empty() { return Ok(()) }
		tracing::warn!( "Some modules could not be loaded:\n{errors}" );
		Err( LoadError::Unresolved( errors ))
	}

}
