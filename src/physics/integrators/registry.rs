//! Registry pattern for dynamic integrator management
//!
//! The registry serves as a discovery and factory mechanism for integrators.
//! Each integrator is self-describing, providing its own name, aliases, and
//! convergence order. The registry queries this metadata during registration
//! to build lookup tables for name resolution and instantiation.

use super::Integrator;
use crate::error::PendulumError;
use std::collections::{BTreeSet, HashMap};

/// Registry for runtime integrator registration
///
/// The registry maintains instances of each integrator indexed by canonical name
/// and by alias. Integrators are stateless ZSTs, so `create` is just a new Box.
pub struct IntegratorRegistry {
    /// Maps names (canonical and aliases) to integrator instances
    integrators: HashMap<String, Box<dyn Integrator>>,
}

impl IntegratorRegistry {
    /// Create an empty registry without any pre-registered integrators.
    pub fn new() -> Self {
        Self {
            integrators: HashMap::new(),
        }
    }

    /// Register all built-in integrators.
    ///
    /// Returns self for method chaining.
    pub fn with_standard_integrators(mut self) -> Self {
        use super::{
            ExplicitEuler, Heun, Pefrl, RungeKuttaFourthOrder, RungeKuttaSecondOrderMidpoint,
            SymplecticEuler, VelocityVerlet,
        };

        self.register_integrator(Box::new(ExplicitEuler));
        self.register_integrator(Box::new(SymplecticEuler));
        self.register_integrator(Box::new(VelocityVerlet));
        self.register_integrator(Box::new(Heun));
        self.register_integrator(Box::new(RungeKuttaSecondOrderMidpoint));
        self.register_integrator(Box::new(RungeKuttaFourthOrder));
        self.register_integrator(Box::new(Pefrl));

        self
    }

    /// Register a single integrator.
    ///
    /// Returns self for method chaining.
    pub fn with_integrator(mut self, integrator: Box<dyn Integrator>) -> Self {
        self.register_integrator(integrator);
        self
    }

    pub fn register_integrator(&mut self, integrator: Box<dyn Integrator>) {
        for alias in integrator.aliases() {
            self.integrators
                .insert(alias.to_string(), integrator.clone_box());
        }

        self.integrators
            .insert(integrator.name().to_string(), integrator);
    }

    /// Instantiate the integrator registered under `name` (canonical or alias)
    pub fn create(&self, name: &str) -> Result<Box<dyn Integrator>, PendulumError> {
        self.integrators
            .get(name)
            .map(|integrator| integrator.clone_box())
            .ok_or_else(|| {
                let aliases: Vec<String> = self
                    .list_aliases()
                    .into_iter()
                    .map(|(alias, _)| alias)
                    .collect();
                PendulumError::UnknownIntegrator {
                    name: name.to_string(),
                    available: self.list_available().join(", "),
                    aliases: aliases.join(", "),
                }
            })
    }

    /// Sorted canonical names
    pub fn list_available(&self) -> Vec<String> {
        self.integrators
            .values()
            .map(|integrator| integrator.name().to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Sorted `(alias, canonical name)` pairs
    pub fn list_aliases(&self) -> Vec<(String, String)> {
        let mut aliases: Vec<(String, String)> = self
            .integrators
            .iter()
            .filter(|(key, integrator)| key.as_str() != integrator.name())
            .map(|(key, integrator)| (key.clone(), integrator.name().to_string()))
            .collect();

        aliases.sort_by(|a, b| a.0.cmp(&b.0));
        aliases
    }
}

impl Default for IntegratorRegistry {
    fn default() -> Self {
        Self::new().with_standard_integrators()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::integrators::OdeSystem;
    use crate::physics::math::{PhaseState, Scalar};

    // Test-specific minimal integrator implementations
    #[derive(Debug, Clone)]
    struct TestIntegratorA;

    impl Integrator for TestIntegratorA {
        fn clone_box(&self) -> Box<dyn Integrator> {
            Box::new(self.clone())
        }

        fn step(&self, _: &mut PhaseState, _: &dyn OdeSystem, _: Scalar, _: Scalar) {}

        fn convergence_order(&self) -> usize {
            2
        }

        fn name(&self) -> &'static str {
            "test_a"
        }

        fn aliases(&self) -> Vec<&'static str> {
            vec!["ta", "test_alias_a"]
        }
    }

    #[derive(Debug, Clone)]
    struct TestIntegratorB;

    impl Integrator for TestIntegratorB {
        fn clone_box(&self) -> Box<dyn Integrator> {
            Box::new(self.clone())
        }

        fn step(&self, _: &mut PhaseState, _: &dyn OdeSystem, _: Scalar, _: Scalar) {}

        fn convergence_order(&self) -> usize {
            4
        }

        fn name(&self) -> &'static str {
            "test_b"
        }

        fn aliases(&self) -> Vec<&'static str> {
            vec!["tb"]
        }
    }

    fn create_test_registry() -> IntegratorRegistry {
        IntegratorRegistry::new()
            .with_integrator(Box::new(TestIntegratorA))
            .with_integrator(Box::new(TestIntegratorB))
    }

    #[test]
    fn test_registry_discovery() {
        let registry = create_test_registry();
        assert_eq!(registry.list_available(), vec!["test_a", "test_b"]);
    }

    #[test]
    fn test_alias_resolution() {
        let registry = create_test_registry();

        let canonical = registry.create("test_a").unwrap();
        let via_alias = registry.create("test_alias_a").unwrap();
        assert_eq!(canonical.name(), via_alias.name());
        assert_eq!(
            canonical.convergence_order(),
            via_alias.convergence_order()
        );

        assert_eq!(registry.create("tb").unwrap().name(), "test_b");
    }

    #[test]
    fn test_list_aliases() {
        let registry = create_test_registry();
        let alias_map: HashMap<_, _> = registry.list_aliases().into_iter().collect();

        assert_eq!(alias_map.get("ta"), Some(&"test_a".to_string()));
        assert_eq!(alias_map.get("test_alias_a"), Some(&"test_a".to_string()));
        assert_eq!(alias_map.get("tb"), Some(&"test_b".to_string()));
        assert_eq!(alias_map.len(), 3, "Should have exactly 3 aliases");
    }

    #[test]
    fn test_unknown_integrator_error() {
        let registry = create_test_registry();

        let error = registry.create("nonexistent").unwrap_err();
        let message = error.to_string();
        assert!(message.contains("Unknown integrator: 'nonexistent'"));
        assert!(message.contains("Available integrators: test_a, test_b"));
        assert!(message.contains("Aliases: ta, tb, test_alias_a"));
    }

    #[test]
    fn test_standard_integrators() {
        let registry = IntegratorRegistry::default();

        assert_eq!(
            registry.list_available(),
            vec![
                "explicit_euler",
                "heun",
                "pefrl",
                "rk2_midpoint",
                "rk4",
                "symplectic_euler",
                "velocity_verlet",
            ]
        );
        assert_eq!(registry.create("euler").unwrap().name(), "symplectic_euler");
        assert_eq!(registry.create("runge_kutta").unwrap().convergence_order(), 4);
        assert_eq!(
            registry.create(crate::physics::integrators::DEFAULT_INTEGRATOR).unwrap().name(),
            "rk4"
        );
    }
}
