use crate::Instrument;
use crate::catalog::{AgeBand, Catalog, Item, ItemOption, Section, SectionId, SkillType};
use crate::error::CatalogError;

use SectionId::{General, Manipulation, Prone, Sitting, Standing, Supine};
use SkillType::{Adaptability, Fluency, Performance, Symmetry, Variation};

/// IMP: Infant Motor Profile.
/// 80 items across six positional sections, each classified under one of
/// five skill types. Every item is rated from spontaneous behavior; the 15
/// adaptability items additionally require the evaluator to provoke a
/// response.
pub struct Imp;

impl Instrument for Imp {
    fn id(&self) -> &str {
        "imp"
    }

    fn name(&self) -> &str {
        "IMP (Infant Motor Profile)"
    }

    fn catalog(&self) -> Result<Catalog, CatalogError> {
        build_catalog().map(|catalog| catalog.with_name(self.name()))
    }
}

fn build_catalog() -> Result<Catalog, CatalogError> {
    let items = ITEMS
        .iter()
        .map(|def| Item {
            id: def.id.to_string(),
            title: def.title.to_string(),
            section: def.section,
            sequence_number: def.number,
            skill_type: def.skill,
            options: def
                .options
                .iter()
                .map(|&(value, text)| ItemOption {
                    value,
                    text: text.to_string(),
                })
                .collect(),
        })
        .collect();

    let sections = SECTIONS
        .iter()
        .map(|&(id, start, end, title, short_title)| Section {
            id,
            start,
            end,
            title: title.to_string(),
            short_title: short_title.to_string(),
        })
        .collect();

    let age_bands = AGE_BANDS
        .iter()
        .map(|&(min_weeks, max_weeks, [p5, p16, p25, p50, p75, p95])| AgeBand {
            min_weeks,
            max_weeks,
            p5,
            p16,
            p25,
            p50,
            p75,
            p95,
        })
        .collect();

    Catalog::new(
        items,
        sections,
        ITEMS.iter().map(|def| def.id),
        PROVOKED.iter().copied(),
        age_bands,
    )
}

struct ItemDef {
    id: &'static str,
    title: &'static str,
    section: SectionId,
    number: u32,
    skill: SkillType,
    options: &'static [(i64, &'static str)],
}

const SECTIONS: [(SectionId, u32, u32, &str, &str); 6] = [
    (Supine, 1, 21, "Posición Boca Arriba (Decúbito Supino)", "Boca Arriba"),
    (Prone, 22, 33, "Posición Boca Abajo (Decúbito Prono)", "Boca Abajo"),
    (Sitting, 34, 46, "Posición Sentada (Sedestación)", "Sentada"),
    (Standing, 47, 65, "Posición de Pie (Bipedestación) y Marcha", "De Pie"),
    (
        Manipulation,
        66,
        74,
        "Alcance, agarre y manipulación de objetos durante sedestación",
        "Manipulación",
    ),
    (General, 75, 80, "General: Ítems observados durante la evaluación", "General"),
];

// (min weeks, max weeks, [p5, p16, p25, p50, p75, p95])
const AGE_BANDS: [(u32, u32, [u32; 6]); 8] = [
    (32, 34, [20, 30, 35, 45, 55, 65]),
    (35, 37, [25, 35, 40, 50, 60, 70]),
    (38, 40, [30, 40, 45, 55, 65, 75]),
    (41, 43, [35, 45, 50, 60, 70, 80]),
    (44, 47, [40, 50, 55, 65, 75, 85]),
    (48, 51, [45, 55, 60, 70, 80, 90]),
    (52, 55, [50, 60, 65, 75, 85, 95]),
    (56, 64, [55, 65, 70, 80, 90, 100]),
];

const PROVOKED: &[&str] = &[
    "adaptabilidad_movimientos_cabeza",
    "adaptabilidad_alcance_supino",
    "adaptabilidad_mano_supino",
    "adaptabilidad_movimientos_cabeza_prono",
    "adaptabilidad_gateo",
    "adaptabilidad_sedestacion",
    "adaptabilidad_sentarse",
    "adaptabilidad_ponerse_pie",
    "adaptabilidad_brazos_marcha",
    "adaptabilidad_tronco_marcha",
    "adaptabilidad_piernas_marcha",
    "adaptabilidad_pie_marcha",
    "adaptabilidad_alcance_sedestacion",
    "adaptabilidad_mano_sedestacion",
    "adaptabilidad_expresion_facial",
];

const ITEMS: &[ItemDef] = &[
    ItemDef {
        id: "control_cabeza",
        title: "Control de movimientos de la cabeza",
        section: Supine,
        number: 1,
        skill: Performance,
        options: &[
            (1, "No controla los movimientos de la cabeza"),
            (2, "Controla los movimientos de la cabeza de forma limitada"),
            (3, "Controla los movimientos de la cabeza"),
        ],
    },
    ItemDef {
        id: "variedad_movimientos_cabeza",
        title: "Variedad de movimientos de la cabeza",
        section: Supine,
        number: 2,
        skill: Variation,
        options: &[
            (1, "Variedad insuficiente"),
            (2, "Variedad suficiente"),
        ],
    },
    ItemDef {
        id: "adaptabilidad_movimientos_cabeza",
        title: "Capacidad de adaptar los movimientos de la cabeza",
        section: Supine,
        number: 3,
        skill: Adaptability,
        options: &[
            (1, "Sin capacidad de adaptar el movimiento"),
            (2, "Con capacidad de adaptar el movimiento"),
        ],
    },
    ItemDef {
        id: "posicion_cabeza_lado",
        title: "Posición de la cabeza, tendencia hacia un lado",
        section: Supine,
        number: 4,
        skill: Symmetry,
        options: &[
            (1, "Posición muy marcada hacia derecha/izquierda"),
            (2, "Posición moderadamente marcada hacia derecha/izquierda"),
            (3, "Sin posición predominante o ligera tendencia hacia un lado"),
        ],
    },
    ItemDef {
        id: "rtca_presencia",
        title: "Postura, presencia de reflejo tónico del cuello (RTCA)",
        section: Supine,
        number: 5,
        skill: Variation,
        options: &[
            (1, "Reflejo frecuente u obligatorio"),
            (2, "Sin reflejo o reflejo ocasional no obligatorio"),
        ],
    },
    ItemDef {
        id: "hiperextension_presencia",
        title: "Postura, presencia de hiperextensión de cuello y tronco",
        section: Supine,
        number: 6,
        skill: Variation,
        options: &[
            (1, "Extensión excesiva frecuente o persistente"),
            (2, "Sin extensión excesiva o raramente presente"),
        ],
    },
    ItemDef {
        id: "manipulacion_manos",
        title: "Manipulación con manos y dedos",
        section: Supine,
        number: 7,
        skill: Performance,
        options: &[
            (1, "No manipula"),
            (2, "Manipula ropa; con manos en línea media, sobre rodillas o pies; juega con manos en boca"),
        ],
    },
    ItemDef {
        id: "variedad_movimientos_brazos",
        title: "Variedad de movimientos de brazos",
        section: Supine,
        number: 8,
        skill: Variation,
        options: &[
            (1, "Variedad insuficiente"),
            (2, "Variedad suficiente"),
        ],
    },
    ItemDef {
        id: "variedad_movimientos_dedos",
        title: "Variedad de movimientos de dedos",
        section: Supine,
        number: 9,
        skill: Variation,
        options: &[
            (1, "Variedad insuficiente"),
            (2, "Variedad suficiente"),
        ],
    },
    ItemDef {
        id: "basculacion_pelvis",
        title: "Movimiento de la pelvis (basculación pélvica)",
        section: Supine,
        number: 10,
        skill: Performance,
        options: &[
            (1, "Sin movimiento de pelvis"),
            (2, "Mueve la pelvis, pero no lo suficiente para que las manos toquen las rodillas"),
            (3, "Mueve la pelvis permitiendo que las manos toquen las rodillas"),
            (4, "Las manos juegan con los pies"),
        ],
    },
    ItemDef {
        id: "variedad_movimientos_piernas",
        title: "Variedad de movimientos de piernas",
        section: Supine,
        number: 11,
        skill: Variation,
        options: &[
            (1, "Variedad insuficiente"),
            (2, "Variedad suficiente"),
        ],
    },
    ItemDef {
        id: "variedad_movimientos_dedos_pie",
        title: "Variedad de movimientos de dedos del pie",
        section: Supine,
        number: 12,
        skill: Variation,
        options: &[
            (1, "Variedad insuficiente"),
            (2, "Variedad suficiente"),
        ],
    },
    ItemDef {
        id: "giro_supino_prono",
        title: "Giro (volteo) de boca arriba a boca abajo",
        section: Supine,
        number: 13,
        skill: Performance,
        options: &[
            (1, "Sin intentos de giro"),
            (2, "Hace movimientos serpenteantes con la pelvis, pero no gira hacia el lado"),
            (3, "Gira hacia un lado, unilateral"),
            (4, "Gira hacia ambos lados"),
            (5, "Se voltea completamente hacia un lado"),
            (6, "Se voltea completamente hacia ambos lados"),
        ],
    },
    ItemDef {
        id: "alcance_manipulacion",
        title: "Alcance, agarre y manipulación de objetos",
        section: Supine,
        number: 14,
        skill: Performance,
        options: &[
            (1, "No intenta alcanzar, no muestra movimientos de intento"),
            (2, "No alcanza, pero muestra intentos de movimiento"),
            (3, "Intenta alcanzar el objeto pero no lo agarra"),
            (4, "Alcanza, agarra y sostiene el objeto, pero no lo manipula"),
            (5, "Alcanza, sostiene y manipula 1 objeto"),
            (6, "Alcanza, sostiene y manipula 2 objetos"),
            (7, "Alcanza y sostiene ≥3 objetos"),
        ],
    },
    ItemDef {
        id: "asimetria_alcance_supino",
        title: "Alcance, agarre y manipulación: presencia de asimetría",
        section: Supine,
        number: 15,
        skill: Symmetry,
        options: &[
            (0, "Sin movimientos de alcance o intento"),
            (1, "Asimetría marcada, lado derecho/izquierdo peor"),
            (2, "Asimetría moderada, lado derecho/izquierdo peor"),
            (3, "Sin asimetría o asimetría leve"),
        ],
    },
    ItemDef {
        id: "variedad_alcance_supino",
        title: "Variedad en movimientos de alcance de los brazos",
        section: Supine,
        number: 16,
        skill: Variation,
        options: &[
            (0, "Sin movimientos de alcance"),
            (1, "Variedad insuficiente"),
            (2, "Variedad suficiente"),
        ],
    },
    ItemDef {
        id: "adaptabilidad_alcance_supino",
        title: "Adaptabilidad de movimientos de alcance de los brazos",
        section: Supine,
        number: 17,
        skill: Adaptability,
        options: &[
            (0, "Sin movimientos de alcance"),
            (1, "Sin capacidad de adaptar el movimiento"),
            (2, "Con capacidad de adaptar el movimiento"),
        ],
    },
    ItemDef {
        id: "variedad_mano_alcance_supino",
        title: "Variedad en movimientos de la mano durante alcance, agarre y manipulación",
        section: Supine,
        number: 18,
        skill: Variation,
        options: &[
            (0, "Sin movimientos de alcance"),
            (1, "Variedad insuficiente"),
            (2, "Variedad suficiente"),
        ],
    },
    ItemDef {
        id: "adaptabilidad_mano_supino",
        title: "Adaptabilidad de movimientos de la mano durante alcance, agarre y manipulación",
        section: Supine,
        number: 19,
        skill: Adaptability,
        options: &[
            (0, "Sin movimientos de alcance"),
            (1, "Sin capacidad de adaptar el movimiento"),
            (2, "Con capacidad de adaptar el movimiento"),
        ],
    },
    ItemDef {
        id: "temblor_alcance_supino",
        title: "Temblor durante intentos de alcance",
        section: Supine,
        number: 20,
        skill: Fluency,
        options: &[
            (0, "Sin movimientos de alcance o intento"),
            (1, "Temblor frecuente"),
            (2, "Sin temblor o temblor ocasional"),
        ],
    },
    ItemDef {
        id: "fluidez_movimiento_supino",
        title: "Fluidez de movimiento en posición boca arriba",
        section: Supine,
        number: 21,
        skill: Fluency,
        options: &[
            (1, "No fluido: rígido, brusco, flácido/lento"),
            (2, "Fluido"),
        ],
    },
    ItemDef {
        id: "elevacion_cabeza_prono",
        title: "Elevación de la cabeza en prono",
        section: Prone,
        number: 22,
        skill: Performance,
        options: &[
            (1, "No levanta ni gira la cabeza"),
            (2, "Gira la cabeza hacia un lado con mínima elevación"),
            (3, "Levanta la cabeza durante unos segundos"),
            (4, "Mantiene la cabeza levantada al menos 10 segundos, con alguna dificultad para mirar alrededor"),
            (5, "Mantiene la cabeza levantada y mira alrededor"),
        ],
    },
    ItemDef {
        id: "posicion_cabeza_prono",
        title: "Posición de la cabeza, presencia de tendencia hacia un lado",
        section: Prone,
        number: 23,
        skill: Symmetry,
        options: &[
            (0, "No levanta ni gira la cabeza"),
            (1, "Posición muy marcada hacia derecha/izquierda"),
            (2, "Posición moderadamente marcada hacia derecha/izquierda"),
            (3, "Sin posición predominante o ligera tendencia hacia un lado"),
        ],
    },
    ItemDef {
        id: "variedad_movimientos_cabeza_prono",
        title: "Variedad de movimientos de la cabeza",
        section: Prone,
        number: 24,
        skill: Variation,
        options: &[
            (1, "Variedad insuficiente"),
            (2, "Variedad suficiente"),
        ],
    },
    ItemDef {
        id: "adaptabilidad_movimientos_cabeza_prono",
        title: "Adaptabilidad de movimientos de la cabeza",
        section: Prone,
        number: 25,
        skill: Adaptability,
        options: &[
            (1, "Sin capacidad de adaptar el movimiento"),
            (2, "Con capacidad de adaptar el movimiento"),
        ],
    },
    ItemDef {
        id: "capacidad_funcional_hombros",
        title: "Capacidad funcional de la cintura escapular mientras está en prono",
        section: Prone,
        number: 26,
        skill: Performance,
        options: &[
            (1, "No usa brazos ni manos para elevar cabeza y tórax"),
            (2, "Usa brazos y manos para elevar cabeza y tórax, pero no logra apoyo activo en codos y antebrazos"),
            (3, "Se apoya en codos y antebrazos"),
            (4, "Eleva la parte superior del tórax apoyándose en manos con brazos extendidos"),
        ],
    },
    ItemDef {
        id: "capacidad_funcional_brazos",
        title: "Capacidad funcional de brazos y manos mientras está en prono",
        section: Prone,
        number: 27,
        skill: Performance,
        options: &[
            (1, "Tiene dificultades para usar brazos y manos en control postural y no los usa para otras actividades"),
            (2, "Usa uno o dos brazos y manos para control postural, sin usarlos para otras actividades"),
            (3, "Usa uno o dos brazos para control postural mientras las manos muestran algo de juego"),
            (4, "Usa un brazo para apoyo postural y usa el otro brazo y mano para alcance y manipulación"),
        ],
    },
    ItemDef {
        id: "asimetria_postura_prono",
        title: "Postura y movimientos de brazos y manos durante actividad: presencia de asimetría",
        section: Prone,
        number: 28,
        skill: Symmetry,
        options: &[
            (0, "Ambos brazos permanecen en posición impuesta por examinador"),
            (1, "Asimetría marcada, lado derecho/izquierdo peor"),
            (2, "Asimetría moderada, lado derecho/izquierdo peor"),
            (3, "Sin asimetría o asimetría leve"),
        ],
    },
    ItemDef {
        id: "progresion_prono",
        title: "Progresión mientras está en prono: desarrollo del gateo",
        section: Prone,
        number: 29,
        skill: Performance,
        options: &[
            (1, "No muestra giro sobre sí mismo (pivote) ni gateo"),
            (2, "Gira sobre sí mismo (pivote)"),
            (3, "Gateo sobre abdomen, usa brazos y/o piernas"),
            (4, "Gatea sobre manos y rodillas, abdomen separado de la superficie"),
        ],
    },
    ItemDef {
        id: "variedad_pregateo",
        title: "Variedad en movimientos pre-gateo de las piernas",
        section: Prone,
        number: 30,
        skill: Variation,
        options: &[
            (0, "Muestra progresión en prono (gateo)"),
            (1, "Variedad insuficiente"),
            (2, "Variedad suficiente"),
        ],
    },
    ItemDef {
        id: "giro_prono_supino",
        title: "Giro (volteo) de boca abajo a boca arriba",
        section: Prone,
        number: 31,
        skill: Performance,
        options: &[
            (0, "No muestra giro ya que prefiere cambiar de posición mediante gateo"),
            (1, "Sin intentos de giro, no puede cambiar posición con ayuda de sentado o gateo"),
            (2, "Gira hacia un lado, unilateral"),
            (3, "Gira hacia ambos lados"),
            (4, "Voltea completamente hacia un lado"),
            (5, "Voltea completamente hacia ambos lados"),
        ],
    },
    ItemDef {
        id: "variedad_gateo",
        title: "Variedad en el gateo",
        section: Prone,
        number: 32,
        skill: Variation,
        options: &[
            (0, "No muestra progresión en prono"),
            (1, "Variedad insuficiente"),
            (2, "Variedad suficiente"),
        ],
    },
    ItemDef {
        id: "adaptabilidad_gateo",
        title: "Adaptabilidad del gateo",
        section: Prone,
        number: 33,
        skill: Adaptability,
        options: &[
            (0, "No muestra progresión en prono"),
            (1, "Sin capacidad de adaptar el movimiento"),
            (2, "Con capacidad de adaptar el movimiento"),
        ],
    },
    ItemDef {
        id: "control_cabeza_sedestacion",
        title: "Control de movimientos de la cabeza",
        section: Sitting,
        number: 34,
        skill: Performance,
        options: &[
            (1, "No controla los movimientos de la cabeza"),
            (2, "Controla los movimientos de la cabeza de forma limitada"),
            (3, "Controla los movimientos de la cabeza"),
        ],
    },
    ItemDef {
        id: "posicion_cabeza_sedestacion",
        title: "Posición de la cabeza mientras está sentado: tendencia hacia un lado",
        section: Sitting,
        number: 35,
        skill: Symmetry,
        options: &[
            (1, "Posición muy marcada hacia derecha/izquierda"),
            (2, "Posición moderadamente marcada hacia derecha/izquierda"),
            (3, "Sin posición predominante o ligera tendencia hacia un lado"),
        ],
    },
    ItemDef {
        id: "capacidad_sentarse",
        title: "Capacidad de mantenerse sentado",
        section: Sitting,
        number: 36,
        skill: Performance,
        options: &[
            (1, "No puede sentarse independientemente"),
            (2, "Se sienta con flexión extrema de pelvis (abdomen tocando muslos), brazos apoyados; no puede sentarse erguido"),
            (3, "Se sienta independientemente más de 5 segundos; no puede desplazar peso"),
            (4, "Se sienta independientemente, puede desplazar peso, pero muestra poca o ninguna rotación de tronco"),
            (5, "Se sienta independientemente y puede desplazar peso y rotar el tronco"),
        ],
    },
    ItemDef {
        id: "postura_tronco_sedestacion",
        title: "Postura del tronco en sedestación independiente",
        section: Sitting,
        number: 37,
        skill: Performance,
        options: &[
            (0, "No puede sentarse independientemente"),
            (1, "Espalda redondeada"),
            (2, "Espalda recta"),
        ],
    },
    ItemDef {
        id: "asimetria_tronco_piernas",
        title: "Postura de tronco y piernas mientras está sentado: presencia de asimetría",
        section: Sitting,
        number: 38,
        skill: Symmetry,
        options: &[
            (0, "No puede sentarse independientemente"),
            (1, "Asimetría marcada, se cae hacia derecha/izquierda"),
            (2, "Asimetría moderada, se inclina hacia derecha/izquierda"),
            (3, "Sin asimetría o asimetría leve"),
        ],
    },
    ItemDef {
        id: "asimetria_extremidades_superiores",
        title: "Postura y movimientos de extremidades superiores durante sedestación: presencia de asimetría",
        section: Sitting,
        number: 39,
        skill: Symmetry,
        options: &[
            (0, "Puede sentarse independientemente de forma limitada"),
            (1, "Asimetría marcada, lado derecho/izquierdo peor"),
            (2, "Asimetría moderada, lado derecho/izquierdo peor"),
            (3, "Sin asimetría o asimetría leve"),
        ],
    },
    ItemDef {
        id: "uso_brazos",
        title: "Uso de brazos para actividades voluntarias",
        section: Sitting,
        number: 40,
        skill: Performance,
        options: &[
            (0, "No puede sentarse independientemente"),
            (1, "Usa uno o dos brazos para apoyo postural, no los usa para actividad voluntaria"),
            (2, "Usa un brazo para apoyo postural, usa el otro para actividad voluntaria"),
            (3, "Usa ambos brazos para actividad voluntaria, no los usa para apoyo postural"),
        ],
    },
    ItemDef {
        id: "variedad_sedestacion",
        title: "Variedad en los movimientos durante sedestación",
        section: Sitting,
        number: 41,
        skill: Variation,
        options: &[
            (0, "No puede sentarse independientemente"),
            (1, "Variedad insuficiente"),
            (2, "Variedad suficiente"),
        ],
    },
    ItemDef {
        id: "adaptabilidad_sedestacion",
        title: "Adaptabilidad de movimientos durante sedestación",
        section: Sitting,
        number: 42,
        skill: Adaptability,
        options: &[
            (0, "No puede sentarse independientemente"),
            (1, "Sin capacidad de adaptar el movimiento"),
            (2, "Con capacidad de adaptar el movimiento"),
        ],
    },
    ItemDef {
        id: "pasar_sentado",
        title: "Pasar a posición sentada",
        section: Sitting,
        number: 43,
        skill: Performance,
        options: &[
            (1, "No se sienta o se levanta independientemente"),
            (2, "Se sienta o se levanta independientemente"),
        ],
    },
    ItemDef {
        id: "variedad_sentarse",
        title: "Variedad al pasar a posición sentada",
        section: Sitting,
        number: 44,
        skill: Variation,
        options: &[
            (0, "No mostró o solo mostró una vez movimientos para sentarse o levantarse"),
            (1, "Variedad insuficiente"),
            (2, "Variedad suficiente"),
        ],
    },
    ItemDef {
        id: "adaptabilidad_sentarse",
        title: "Adaptabilidad al pasar a posición sentada",
        section: Sitting,
        number: 45,
        skill: Adaptability,
        options: &[
            (0, "No mostró o solo mostró una vez movimientos para sentarse o levantarse"),
            (1, "Sin capacidad de adaptar el movimiento"),
            (2, "Con capacidad de adaptar el movimiento"),
        ],
    },
    ItemDef {
        id: "desplazamiento_sentado",
        title: "Desplazamiento sentado",
        section: Sitting,
        number: 46,
        skill: Variation,
        options: &[
            (0, "No puede sentarse independientemente"),
            (1, "El desplazamiento sentado es, aparte de la marcha, la única estrategia para moverse"),
            (2, "Sin desplazamiento sentado o presente como una de las estrategias para moverse"),
        ],
    },
    ItemDef {
        id: "capacidad_bipedestacion",
        title: "Capacidad de mantenerse de pie",
        section: Standing,
        number: 47,
        skill: Performance,
        options: &[
            (1, "No puede ponerse de pie"),
            (2, "Se mantiene de pie con ayuda"),
            (3, "Se mantiene de pie independientemente durante unos segundos"),
            (4, "Se mantiene de pie independientemente más de 10 segundos, pero rota el tronco mínimamente"),
            (5, "Se mantiene de pie independientemente y puede rotar el tronco"),
        ],
    },
    ItemDef {
        id: "ponerse_pie",
        title: "Ponerse de pie",
        section: Standing,
        number: 48,
        skill: Performance,
        options: &[
            (1, "No puede ponerse de pie"),
            (2, "Se pone de rodillas"),
            (3, "Se pone de pie independientemente con ayuda de muebles"),
            (4, "Se pone de pie independientemente sin usar muebles"),
        ],
    },
    ItemDef {
        id: "variedad_ponerse_pie",
        title: "Variedad en ponerse de pie",
        section: Standing,
        number: 49,
        skill: Variation,
        options: &[
            (0, "No se puso de pie o solo lo hizo una vez"),
            (1, "Variedad insuficiente"),
            (2, "Variedad suficiente"),
        ],
    },
    ItemDef {
        id: "adaptabilidad_ponerse_pie",
        title: "Adaptabilidad al ponerse de pie",
        section: Standing,
        number: 50,
        skill: Adaptability,
        options: &[
            (0, "No se puso de pie o solo lo hizo una vez"),
            (1, "Sin capacidad de adaptar el movimiento"),
            (2, "Con capacidad de adaptar el movimiento"),
        ],
    },
    ItemDef {
        id: "marcha",
        title: "Marcha",
        section: Standing,
        number: 51,
        skill: Performance,
        options: &[
            (1, "No puede caminar"),
            (2, "Camina cuando recibe apoyo con dos manos"),
            (3, "Camina cuando recibe apoyo con una mano"),
            (4, "Camina independientemente"),
        ],
    },
    ItemDef {
        id: "equilibrio_marcha",
        title: "Equilibrio mientras camina independientemente",
        section: Standing,
        number: 52,
        skill: Performance,
        options: &[
            (0, "No puede caminar independientemente"),
            (1, "Pobre capacidad de equilibrio"),
            (2, "Moderada capacidad de equilibrio"),
            (3, "Buena capacidad de equilibrio"),
        ],
    },
    ItemDef {
        id: "postura_brazos_marcha",
        title: "Postura de brazos mientras camina independientemente",
        section: Standing,
        number: 53,
        skill: Performance,
        options: &[
            (0, "No puede caminar independientemente"),
            (1, "Guardia alta o semi-alta"),
            (2, "Postura de brazos arbitraria"),
        ],
    },
    ItemDef {
        id: "asimetria_extremidades_superiores_marcha",
        title: "Postura y movimientos de extremidades superiores mientras camina independientemente: presencia de asimetría",
        section: Standing,
        number: 54,
        skill: Symmetry,
        options: &[
            (0, "No puede caminar independientemente"),
            (1, "Asimetría marcada, lado derecho/izquierdo peor"),
            (2, "Asimetría moderada, lado derecho/izquierdo peor"),
            (3, "Sin asimetría o asimetría leve"),
        ],
    },
    ItemDef {
        id: "variedad_brazos_marcha",
        title: "Variedad en movimientos de brazos y manos mientras camina independientemente",
        section: Standing,
        number: 55,
        skill: Variation,
        options: &[
            (0, "No puede caminar independientemente o camina con guardia alta/semi-alta"),
            (1, "Variedad insuficiente"),
            (2, "Variedad suficiente"),
        ],
    },
    ItemDef {
        id: "adaptabilidad_brazos_marcha",
        title: "Adaptabilidad de movimientos de brazos y manos mientras camina independientemente",
        section: Standing,
        number: 56,
        skill: Adaptability,
        options: &[
            (0, "No puede caminar independientemente o camina con guardia alta/semi-alta"),
            (1, "Sin capacidad de adaptar el movimiento"),
            (2, "Con capacidad de adaptar el movimiento"),
        ],
    },
    ItemDef {
        id: "variedad_tronco_marcha",
        title: "Variedad en movimientos del tronco mientras está de pie y camina independientemente",
        section: Standing,
        number: 57,
        skill: Variation,
        options: &[
            (0, "No puede caminar independientemente"),
            (1, "Variedad insuficiente"),
            (2, "Variedad suficiente"),
        ],
    },
    ItemDef {
        id: "adaptabilidad_tronco_marcha",
        title: "Adaptabilidad de movimientos del tronco mientras está de pie y camina independientemente",
        section: Standing,
        number: 58,
        skill: Adaptability,
        options: &[
            (0, "No puede caminar independientemente"),
            (1, "Sin capacidad de adaptar el movimiento"),
            (2, "Con capacidad de adaptar el movimiento"),
        ],
    },
    ItemDef {
        id: "asimetria_piernas_marcha",
        title: "Postura y movimientos de piernas mientras camina independientemente: presencia de asimetría",
        section: Standing,
        number: 59,
        skill: Symmetry,
        options: &[
            (0, "No puede caminar independientemente"),
            (1, "Asimetría marcada, lado derecho/izquierdo peor"),
            (2, "Asimetría moderada, lado derecho/izquierdo peor"),
            (3, "Sin asimetría o asimetría leve"),
        ],
    },
    ItemDef {
        id: "variedad_piernas_marcha",
        title: "Variedad en movimientos de piernas mientras camina independientemente",
        section: Standing,
        number: 60,
        skill: Variation,
        options: &[
            (0, "No puede caminar independientemente"),
            (1, "Variedad insuficiente"),
            (2, "Variedad suficiente"),
        ],
    },
    ItemDef {
        id: "adaptabilidad_piernas_marcha",
        title: "Adaptabilidad de movimientos de piernas mientras camina independientemente",
        section: Standing,
        number: 61,
        skill: Adaptability,
        options: &[
            (0, "No puede caminar independientemente"),
            (1, "Sin capacidad de adaptar el movimiento"),
            (2, "Con capacidad de adaptar el movimiento"),
        ],
    },
    ItemDef {
        id: "marcha_talon_punta",
        title: "Marcha talón-punta mientras camina independientemente",
        section: Standing,
        number: 62,
        skill: Performance,
        options: &[
            (0, "No puede caminar independientemente"),
            (1, "Sin marcha talón-punta o solo ocasionalmente"),
            (2, "Predominantemente marcha talón-punta"),
        ],
    },
    ItemDef {
        id: "variedad_pie_marcha",
        title: "Variedad en movimientos del pie mientras camina independientemente",
        section: Standing,
        number: 63,
        skill: Variation,
        options: &[
            (0, "No puede caminar independientemente"),
            (1, "Variedad insuficiente"),
            (2, "Variedad suficiente"),
        ],
    },
    ItemDef {
        id: "adaptabilidad_pie_marcha",
        title: "Adaptabilidad de movimientos del pie mientras camina independientemente",
        section: Standing,
        number: 64,
        skill: Adaptability,
        options: &[
            (0, "No puede caminar independientemente"),
            (1, "Sin capacidad de adaptar el movimiento"),
            (2, "Con capacidad de adaptar el movimiento"),
        ],
    },
    ItemDef {
        id: "fluidez_marcha",
        title: "Fluidez de movimientos mientras camina independientemente",
        section: Standing,
        number: 65,
        skill: Fluency,
        options: &[
            (1, "No fluido: rígido, brusco, flácido/lento, otro"),
            (2, "La mayoría de movimientos fluidos"),
        ],
    },
    ItemDef {
        id: "alcance_manipulacion_sedestacion",
        title: "Alcance, agarre y manipulación de objetos",
        section: Manipulation,
        number: 66,
        skill: Performance,
        options: &[
            (1, "No intenta alcanzar, no muestra movimientos de intento"),
            (2, "No alcanza, pero muestra intentos de movimiento"),
            (3, "Intenta alcanzar el objeto pero no lo agarra"),
            (4, "Alcanza, agarra y sostiene el objeto, pero no lo manipula"),
            (5, "Alcanza, sostiene y manipula 1 objeto"),
            (6, "Alcanza, sostiene y manipula 2 objetos"),
            (7, "Alcanza y sostiene ≥3 objetos"),
        ],
    },
    ItemDef {
        id: "asimetria_alcance_sedestacion",
        title: "Alcance, agarre y manipulación: presencia de asimetría",
        section: Manipulation,
        number: 67,
        skill: Symmetry,
        options: &[
            (0, "No muestra movimientos de alcance o intento"),
            (1, "Asimetría marcada, lado derecho/izquierdo peor"),
            (2, "Asimetría moderada, lado derecho/izquierdo peor"),
            (3, "Sin asimetría o asimetría leve"),
        ],
    },
    ItemDef {
        id: "variedad_alcance_sedestacion",
        title: "Variedad en movimientos de alcance de los brazos",
        section: Manipulation,
        number: 68,
        skill: Variation,
        options: &[
            (0, "Sin movimientos de alcance"),
            (1, "Variedad insuficiente"),
            (2, "Variedad suficiente"),
        ],
    },
    ItemDef {
        id: "adaptabilidad_alcance_sedestacion",
        title: "Adaptabilidad de movimientos de alcance",
        section: Manipulation,
        number: 69,
        skill: Adaptability,
        options: &[
            (0, "Sin movimientos de alcance"),
            (1, "Sin capacidad de adaptar el movimiento"),
            (2, "Con capacidad de adaptar el movimiento"),
        ],
    },
    ItemDef {
        id: "tipo_agarre",
        title: "Tipo de agarre durante sedestación",
        section: Manipulation,
        number: 70,
        skill: Performance,
        options: &[
            (0, "No agarra el objeto"),
            (1, "Agarre palmar"),
            (2, "Agarre radio-palmar o en tijera"),
            (3, "Pinza inferior"),
            (4, "Pinza"),
        ],
    },
    ItemDef {
        id: "variedad_mano_sedestacion",
        title: "Variedad en movimientos de la mano durante alcance, agarre y manipulación",
        section: Manipulation,
        number: 71,
        skill: Variation,
        options: &[
            (0, "Sin movimientos de alcance"),
            (1, "Variedad insuficiente"),
            (2, "Variedad suficiente"),
        ],
    },
    ItemDef {
        id: "adaptabilidad_mano_sedestacion",
        title: "Adaptabilidad de movimientos de la mano durante alcance, agarre y manipulación",
        section: Manipulation,
        number: 72,
        skill: Adaptability,
        options: &[
            (0, "Sin movimientos de alcance"),
            (1, "Sin capacidad de adaptar el movimiento"),
            (2, "Con capacidad de adaptar el movimiento"),
        ],
    },
    ItemDef {
        id: "temblor_alcance_sedestacion",
        title: "Temblor durante intentos de alcance",
        section: Manipulation,
        number: 73,
        skill: Fluency,
        options: &[
            (0, "No muestra movimientos de alcance o intento"),
            (1, "Temblor frecuente"),
            (2, "Sin temblor o temblor ocasional"),
        ],
    },
    ItemDef {
        id: "fluidez_alcance_sedestacion",
        title: "Fluidez de movimientos durante intentos de alcance",
        section: Manipulation,
        number: 74,
        skill: Fluency,
        options: &[
            (0, "No muestra movimientos de alcance o intento"),
            (1, "No fluido: rígido, brusco, flácido/lento, otro"),
            (2, "La mayoría de movimientos fluidos"),
        ],
    },
    ItemDef {
        id: "variedad_expresion_facial",
        title: "Variedad en expresión facial",
        section: General,
        number: 75,
        skill: Variation,
        options: &[
            (1, "Variedad insuficiente"),
            (2, "Variedad suficiente"),
        ],
    },
    ItemDef {
        id: "adaptabilidad_expresion_facial",
        title: "Adaptabilidad de expresión facial",
        section: General,
        number: 76,
        skill: Adaptability,
        options: &[
            (1, "Sin capacidad de adaptar el movimiento"),
            (2, "Con capacidad de adaptar el movimiento"),
        ],
    },
    ItemDef {
        id: "babeo",
        title: "Babeo",
        section: General,
        number: 77,
        skill: Variation,
        options: &[
            (1, "Babeo marcado"),
            (2, "Sin babeo o babeo escaso"),
        ],
    },
    ItemDef {
        id: "protrusion_lengua",
        title: "Presencia de protrusión estereotipada de lengua",
        section: General,
        number: 78,
        skill: Variation,
        options: &[
            (1, "Sí"),
            (2, "No"),
        ],
    },
    ItemDef {
        id: "temblor_general",
        title: "Temblor",
        section: General,
        number: 79,
        skill: Fluency,
        options: &[
            (1, "Frecuentemente presente"),
            (2, "No presente o presente ocasionalmente"),
        ],
    },
    ItemDef {
        id: "fluidez_comportamiento_motor",
        title: "Fluidez del comportamiento motor",
        section: General,
        number: 80,
        skill: Fluency,
        options: &[
            (1, "No fluido: rígido, brusco, flácido/lento, otro"),
            (2, "Fluido"),
        ],
    },
];
