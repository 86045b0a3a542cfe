//! Static specialist registry.
//!
//! A fixed table of the five specialists. Nothing here allocates or mutates;
//! descriptors live for the whole process.

use thiserror::Error;

use crate::domain::{Specialist, SpecialistDescriptor};

const PH_PROMPT: &str = "Enter current pH level (0-14):";

static REGISTRY: [SpecialistDescriptor; 5] = [
    SpecialistDescriptor {
        specialist: Specialist::Squirtle,
        id: "squirtle",
        display_name: "Squirtle",
        treatment_label: "pH Reduction (Sulfuric Acid)",
        image_ref: "https://assets.pokemon.com/assets/cms2/img/pokedex/full/007.png",
        input_label: PH_PROMPT,
    },
    SpecialistDescriptor {
        specialist: Specialist::Bulbasaur,
        id: "bulbasaur",
        display_name: "Bulbasaur",
        treatment_label: "pH Increase (Sodium Hydroxide)",
        image_ref: "https://assets.pokemon.com/assets/cms2/img/pokedex/full/001.png",
        input_label: PH_PROMPT,
    },
    SpecialistDescriptor {
        specialist: Specialist::Charmander,
        id: "charmander",
        display_name: "Charmander",
        treatment_label: "BOD Reduction (Alum)",
        image_ref: "https://assets.pokemon.com/assets/cms2/img/pokedex/full/004.png",
        input_label: "Enter current BOD level (mg/L):",
    },
    SpecialistDescriptor {
        specialist: Specialist::Pikachu,
        id: "pikachu",
        display_name: "Pikachu",
        treatment_label: "COD Reduction (Potassium Permanganate)",
        image_ref: "https://assets.pokemon.com/assets/cms2/img/pokedex/full/025.png",
        input_label: "Enter current COD level (mg/L):",
    },
    SpecialistDescriptor {
        specialist: Specialist::Vaporeon,
        id: "vaporeon",
        display_name: "Vaporeon",
        treatment_label: "Water Distribution",
        image_ref: "https://assets.pokemon.com/assets/cms2/img/pokedex/full/134.png",
        input_label: "Enter total water volume (m³):",
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Unknown specialist '{0}'. Run `ww list` to see the available ids.")]
    NotFound(String),
}

/// All descriptors in display order.
pub fn all() -> &'static [SpecialistDescriptor] {
    &REGISTRY
}

/// Look up a descriptor by its exact id.
pub fn lookup(id: &str) -> Result<&'static SpecialistDescriptor, RegistryError> {
    REGISTRY
        .iter()
        .find(|d| d.id == id)
        .ok_or_else(|| RegistryError::NotFound(id.to_string()))
}

impl Specialist {
    /// Descriptor for a known specialist. Infallible because the enum is closed.
    pub fn descriptor(self) -> &'static SpecialistDescriptor {
        &REGISTRY[self.index()]
    }
}
