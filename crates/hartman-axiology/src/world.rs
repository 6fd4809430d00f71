//! Questionnaire worlds and their per-dimension definitions.

use crate::dimension::{Dimension, DimensionMap};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three independent 18-item questionnaires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum World {
    External,
    Internal,
    Sexual,
}

/// Title and explanation of one dimension as read inside a world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorldDimension {
    pub title: &'static str,
    pub explanation: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorldDefinition {
    pub large_name: &'static str,
    pub dimensions: DimensionMap<WorldDimension>,
}

impl World {
    pub const ALL: [World; 3] = [World::External, World::Internal, World::Sexual];

    pub const fn as_str(self) -> &'static str {
        match self {
            World::External => "external",
            World::Internal => "internal",
            World::Sexual => "sexual",
        }
    }

    pub const fn large_name(self) -> &'static str {
        match self {
            World::External => "Mundo Externo",
            World::Internal => "Mundo Interno",
            World::Sexual => "Mundo Sexual",
        }
    }

    pub fn definition(self) -> WorldDefinition {
        WorldDefinition {
            large_name: self.large_name(),
            dimensions: DimensionMap::from_fn(|dim| self.dimension(dim)),
        }
    }

    pub fn dimension_title(self, dimension: Dimension) -> &'static str {
        self.dimension(dimension).title
    }

    pub fn dimension_explanation(self, dimension: Dimension) -> &'static str {
        self.dimension(dimension).explanation
    }

    fn dimension(self, dimension: Dimension) -> WorldDimension {
        use Dimension::*;
        use World::*;

        let (title, explanation) = match (self, dimension) {
            (External, Intrinsic) => (
                "Empatía",
                "Capacidad para reconocer la singularidad y el valor fundamental de cada persona; capacidad de amar y dejarse amar y entender los límites de las interacciones afectivas sin relaciones de dominio o dependencia. Empatía cognitiva, para comprender las ideas de otros; capacidad para valorar a los demás por su función social.",
            ),
            (External, Extrinsic) => (
                "Juicio práctico",
                "Capacidad para planear, organizar y ejecutar tareas, presentes y futuras. Capacidad de entender el orden y la funcionalidad de los objetos y procesos en tiempo real. Juicio positivo para leer el contexto como un campo de oportunidad para la acción.",
            ),
            (External, Systemic) => (
                "Juicio normativo",
                "Pensamiento conceptual para la comprensión de reglas, normas, teorías y el desarrollo de la cosmovisión, relación con la autoridad; capacidad de significar los sistemas y tener perspectiva de la totalidad.",
            ),
            (Internal, Intrinsic) => (
                "Autoestima",
                "Comprensión de la singularidad del yo, sentido de autoafirmación, capacidad de autocuidado, reconocimiento de las necesidades personales y compromiso para atenderlas. Autoaceptación básica. Valorar el yo a partir de las actividades realizadas e independientemente de logros o fracasos. Capacidad para desarrollar un sentido de pertenencia.",
            ),
            (Internal, Extrinsic) => (
                "Vocación y roles sociales",
                "Capacidad de valorarse en los distintos roles sociales: hijo/ cónyuge, hermano, padre/madre/profesionista/creyente, etc., Capacidad para formar y elegir valores libremente en el desarrollo de la vocación y las funciones sociales, sumando pasos y procesos en tiempo lineal.",
            ),
            (Internal, Systemic) => (
                "Autodirección y autodisciplina",
                "Capacidad para desarrollar valores libremente elegidos en el diseño de la auto meta o misión para la autodirección. Normatividad Interna. Capacidad de ponerse metas personales y cumplirlas sin rigidez/per-feccionismo o pereza y laxitud.",
            ),
            (Sexual, Intrinsic) => (
                "Empatía",
                "Entrega amorosa, dar y recibir afecto. Unión e intimidad. con ternura, gracia y empatía. Aspecto trascendente de la sexualidad, éxtasis del corazón. Acción de reunir el sexo con el amor en un romanticismo con imaginación. Capacidad para reconocer la singularidad del otro, detectando las sutilezas de la comunicación erótica; contacto de miradas, bromas y juegos íntimos. Dejarse amar y saber expresar lo que enciende la conexión sin inhibición en la entrega.",
            ),
            (Sexual, Extrinsic) => (
                "Descarga orgásmica/placer",
                "La bioenergética consumada en el orgasmo físico sexual. Cognición encarnada de la función del placer reconociendo las sensaciones mutuas en cada fase del coito: cortejo, excitación, clímax, e integración en la paz. Se asume el impulso agresivo positivo del movimiento pélvico acelerado para alcanzar el orgasmo. Así el clímax sexual cumple su función bioenergética de liberación de tensiones físicas y emocionales para desarmar la rigidez corporal asumiendo el flujo instintivo sin temor ni represión.",
            ),
            (Sexual, Systemic) => (
                "Juicio normativo",
                "Representa las teorías sexuales que se asumen, así como el conocimiento de las técnicas y el ritual sexual espacio temporal. Reconoce los límites y alcances de la práctica sexual, así como el mejoramiento de la destreza sexual y la evolución de los conceptos sexuales conforme madura el yo.",
            ),
        };

        WorldDimension { title, explanation }
    }
}

impl fmt::Display for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown world `{0}` (expected external, internal or sexual)")]
pub struct UnknownWorld(pub String);

impl FromStr for World {
    type Err = UnknownWorld;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "external" | "me" | "e" => Ok(World::External),
            "internal" | "mi" | "i" => Ok(World::Internal),
            "sexual" | "ms" | "s" => Ok(World::Sexual),
            _ => Err(UnknownWorld(s.to_string())),
        }
    }
}
