//!
//! Built-in bone categories of the humanoid character skeleton.

use {
    crate::category::{Registry, RegistryError},
    palette::Srgba,
};

const ALPHA: f32 = 0.5647059;

struct Entry {
    name: &'static str,
    color: [f32; 3],
    bones: &'static [&'static str],
}

const WHITE: [f32; 3] = [1.0, 1.0, 1.0];

// Fallback category is created by `Registry::new`.
const TABLE: &[Entry] = &[
    Entry {
        name: "body",
        color: [1.0, 0.0, 0.0],
        bones: &[
            "n_root", "n_hara", "n_throw", "j_kosi", "j_sebo_a", "j_asi_a_l",
            "j_asi_a_r", "j_sebo_b", "j_asi_b_l", "j_asi_b_r", "j_mune_l",
            "j_mune_r", "j_sebo_c", "j_asi_c_l", "j_asi_c_r", "j_kubi",
            "j_sako_l", "j_sako_r", "j_asi_d_l", "j_asi_d_r", "j_ude_a_l",
            "j_ude_a_r", "j_asi_e_l", "j_asi_e_r", "j_ude_b_l", "j_ude_b_r",
            "n_hkata_l", "n_hkata_r", "j_te_l", "j_te_r", "n_hhiji_l",
            "n_hhiji_r",
        ],
    },
    Entry {
        name: "head",
        color: [0.0, 1.0, 0.0],
        bones: &[
            "j_kao", "j_ago", "j_f_dmab_l", "j_f_dmab_r", "j_f_eye_l",
            "j_f_eye_r", "j_f_hana", "j_f_hoho_l", "j_f_hoho_r", "j_f_lip_l",
            "j_f_lip_r", "j_f_mayu_l", "j_f_mayu_r", "j_f_memoto",
            "j_f_miken_l", "j_f_miken_r", "j_f_ulip_a", "j_f_umab_l",
            "j_f_umab_r", "j_f_dlip_a", "j_f_ulip_b", "j_f_dlip_b",
            // Hrothgar
            "j_f_hige_l", "j_f_hige_r", "j_f_uago", "j_f_ulip", "n_f_lip_l",
            "n_f_lip_r", "n_f_ulip_l", "n_f_ulip_r", "j_f_dlip",
        ],
    },
    Entry {
        name: "hair",
        color: [0.0, 0.0, 1.0],
        bones: &["j_kami_a", "j_kami_f_l", "j_kami_f_r", "j_kami_b", "j_ex_met_va"],
    },
    Entry {
        name: "clothes",
        color: [1.0, 1.0, 0.0],
        bones: &[
            "j_sk_b_b_l", "j_sk_b_b_r", "j_sk_f_b_l", "j_sk_f_b_r",
            "j_sk_s_b_l", "j_sk_s_b_r", "j_buki_sebo_l", "j_buki_sebo_r",
            "j_buki2_kosi_l", "j_buki2_kosi_r", "j_buki_kosi_l",
            "j_buki_kosi_r", "j_sk_b_a_l", "j_sk_b_a_r", "j_sk_f_a_l",
            "j_sk_f_a_r", "j_sk_s_a_l", "j_sk_s_a_r", "j_sk_b_c_l",
            "j_sk_b_c_r", "j_sk_f_c_l", "j_sk_f_c_r", "j_sk_s_c_l",
            "j_sk_s_c_r", "n_hizasoubi_l", "n_hizasoubi_r", "n_kataarmor_l",
            "n_kataarmor_r", "n_buki_tate_l", "n_buki_tate_r",
            "n_hijisoubi_l", "n_hijisoubi_r", "n_ear_a_l", "n_ear_a_r",
            "n_ear_b_l", "n_ear_b_r",
        ],
    },
    Entry {
        name: "right hand",
        color: [1.0, 0.0, 1.0],
        bones: &[
            "n_hte_r", "j_hito_a_r", "j_ko_a_r", "j_kusu_a_r", "j_naka_a_r",
            "j_oya_a_r", "n_buki_r", "j_hito_b_r", "j_ko_b_r", "j_kusu_b_r",
            "j_naka_b_r", "j_oya_b_r",
        ],
    },
    Entry {
        name: "left hand",
        color: [0.0, 1.0, 1.0],
        bones: &[
            "n_hte_l", "j_hito_a_l", "j_ko_a_l", "j_kusu_a_l", "j_naka_a_l",
            "j_oya_a_l", "n_buki_l", "j_hito_b_l", "j_ko_b_l", "j_kusu_b_l",
            "j_naka_b_l", "j_oya_b_l",
        ],
    },
    Entry {
        name: "tail",
        color: WHITE,
        bones: &["n_sippo_a", "n_sippo_b", "n_sippo_c", "n_sippo_d", "n_sippo_e"],
    },
    Entry {
        name: "ears",
        color: WHITE,
        bones: &[
            "j_mimi_l", "j_mimi_r", "j_zera_a_l", "j_zera_a_r", "j_zera_b_l",
            "j_zera_b_r", "j_zerb_a_l", "j_zerb_a_r", "j_zerb_b_l",
            "j_zerb_b_r", "j_zerc_a_l", "j_zerc_a_r", "j_zerc_b_l",
            "j_zerc_b_r", "j_zerd_a_l", "j_zerd_a_r", "j_zerd_b_l",
            "j_zerd_b_r",
        ],
    },
    Entry {
        name: "feet",
        color: WHITE,
        bones: &[],
    },
    // IVCS
    Entry {
        name: "ivcs left hand",
        color: WHITE,
        bones: &["iv_ko_c_l", "iv_kusu_c_l", "iv_naka_c_l", "iv_hito_c_l"],
    },
    Entry {
        name: "ivcs right hand",
        color: WHITE,
        bones: &["iv_ko_c_r", "iv_kusu_c_r", "iv_naka_c_r", "iv_hito_c_r"],
    },
    Entry {
        name: "ivcs left foot",
        color: WHITE,
        bones: &[
            "iv_asi_oya_a_l", "iv_asi_oya_b_l", "iv_asi_hito_a_l",
            "iv_asi_hito_b_l", "iv_asi_naka_a_l", "iv_asi_naka_b_l",
            "iv_asi_kusu_a_l", "iv_asi_kusu_b_l", "iv_asi_ko_a_l",
            "iv_asi_ko_b_l",
        ],
    },
    Entry {
        name: "ivcs right foot",
        color: WHITE,
        bones: &[
            "iv_asi_oya_a_r", "iv_asi_oya_b_r", "iv_asi_hito_a_r",
            "iv_asi_hito_b_r", "iv_asi_naka_a_r", "iv_asi_naka_b_r",
            "iv_asi_kusu_a_r", "iv_asi_kusu_b_r", "iv_asi_ko_a_r",
            "iv_asi_ko_b_r",
        ],
    },
    Entry {
        name: "ivcs body",
        color: WHITE,
        bones: &["iv_nitoukin_l", "iv_nitoukin_r", "iv_c_mune_l", "iv_c_mune_r"],
    },
    Entry {
        name: "ivcs penis",
        color: WHITE,
        bones: &[
            "iv_kougan_l", "iv_kougan_r", "iv_ochinko_a", "iv_ochinko_b",
            "iv_ochinko_c", "iv_ochinko_d", "iv_ochinko_e", "iv_ochinko_f",
        ],
    },
    Entry {
        name: "ivcs vagina",
        color: WHITE,
        bones: &["iv_kuritto", "iv_inshin_l", "iv_inshin_r"],
    },
    Entry {
        name: "ivcs buttocks",
        color: WHITE,
        bones: &["iv_koumon", "iv_koumon_l", "iv_koumon_r", "iv_shiri_l", "iv_shiri_r"],
    },
];

impl Registry {
    /// Registry with every built-in category.
    ///
    /// Fails only if the table itself repeats a category name.
    pub fn builtin() -> Result<Self, RegistryError> {
        let mut registry = Registry::new();
        for entry in TABLE {
            let [r, g, b] = entry.color;
            registry.register(
                entry.name,
                Srgba::new(r, g, b, ALPHA),
                entry.bones.iter().copied(),
            )?;
        }
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use {super::*, crate::category::DEFAULT_CATEGORY};

    #[test]
    fn builtin_registers_whole_table() {
        let registry = Registry::builtin().unwrap();
        assert_eq!(registry.len(), TABLE.len() + 1);
        assert_eq!(registry.iter().next().unwrap().name(), DEFAULT_CATEGORY);
        assert!(registry.collisions().is_empty());
        assert!(registry.get("feet").unwrap().bones().is_empty());
    }

    #[test]
    fn builtin_resolves_known_bones() {
        let registry = Registry::builtin().unwrap();
        assert_eq!(registry.resolve(Some("j_kosi")).name(), "body");
        assert_eq!(registry.resolve(Some("j_kao")).name(), "head");
        assert_eq!(registry.resolve(Some("j_f_dlip")).name(), "head");
        assert_eq!(registry.resolve(Some("n_buki_r")).name(), "right hand");
        assert_eq!(registry.resolve(Some("j_zerd_b_r")).name(), "ears");
        assert_eq!(registry.resolve(Some("iv_shiri_l")).name(), "ivcs buttocks");
        assert_eq!(registry.resolve(Some("j_kami_a")).name(), "hair");
    }

    #[test]
    fn builtin_colors() {
        let registry = Registry::builtin().unwrap();
        assert_eq!(
            registry.get("body").unwrap().default_color(),
            Srgba::new(1.0, 0.0, 0.0, ALPHA)
        );
        assert_eq!(
            registry.get("left hand").unwrap().default_color(),
            Srgba::new(0.0, 1.0, 1.0, ALPHA)
        );
        assert_eq!(
            registry.get("tail").unwrap().default_color(),
            registry.default_category().default_color()
        );
    }
}
