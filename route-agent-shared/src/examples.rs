//! Sample requests offered under the form. Clicking one copies it into the input as-is.

pub const EXAMPLE_QUERIES: [&str; 4] = [
    "Estoy en Lima Centro, necesito ir a Miraflores, San Isidro y Barranco",
    "Hoy voy a hacer 3 entregas, una en calle Los Olivos 123, Barranco, otra en jiron Sucre 456, Magdalena y otra en Av. Larco 789, Miraflores",
    "Desde Callao, visitaré San Miguel, Pueblo Libre, Jesús María y volver a casa",
    "Ruta desde Surco: La Molina, Ate, Santa Anita y San Borja",
];
