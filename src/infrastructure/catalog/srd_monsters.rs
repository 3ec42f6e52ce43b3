//! SRD monsters with an integer challenge rating of 1 or more

pub(super) const SRD_MONSTERS: &[(&str, u32)] = &[
    // CR 1
    ("Animated Armor", 1),
    ("Brown Bear", 1),
    ("Bugbear Warrior", 1),
    ("Death Dog", 1),
    ("Dire Wolf", 1),
    ("Dryad", 1),
    ("Ghoul", 1),
    ("Giant Eagle", 1),
    ("Giant Hyena", 1),
    ("Giant Spider", 1),
    ("Giant Toad", 1),
    ("Goblin Boss", 1),
    ("Harpy", 1),
    ("Hippogriff", 1),
    ("Imp", 1),
    ("Lion", 1),
    ("Quasit", 1),
    ("Specter", 1),
    ("Tiger", 1),
    // CR 2
    ("Allosaurus", 2),
    ("Awakened Tree", 2),
    ("Berserker", 2),
    ("Centaur Trooper", 2),
    ("Ettercap", 2),
    ("Gargoyle", 2),
    ("Gelatinous Cube", 2),
    ("Ghast", 2),
    ("Giant Boar", 2),
    ("Gibbering Mouther", 2),
    ("Griffon", 2),
    ("Mimic", 2),
    ("Ogre", 2),
    ("Pegasus", 2),
    ("Plesiosaurus", 2),
    ("Priest", 2),
    ("Rhinoceros", 2),
    ("Sea Hag", 2),
    ("Will-o'-Wisp", 2),
    // CR 3
    ("Ankylosaurus", 3),
    ("Basilisk", 3),
    ("Bearded Devil", 3),
    ("Doppelganger", 3),
    ("Giant Scorpion", 3),
    ("Green Hag", 3),
    ("Hell Hound", 3),
    ("Knight", 3),
    ("Manticore", 3),
    ("Minotaur of Baphomet", 3),
    ("Mummy", 3),
    ("Owlbear", 3),
    ("Phase Spider", 3),
    ("Werewolf", 3),
    ("Wight", 3),
    ("Winter Wolf", 3),
    ("Yeti", 3),
    // CR 4
    ("Banshee", 4),
    ("Black Pudding", 4),
    ("Chuul", 4),
    ("Couatl", 4),
    ("Elephant", 4),
    ("Ettin", 4),
    ("Ghost", 4),
    ("Incubus", 4),
    ("Lamia", 4),
    ("Succubus", 4),
    ("Wereboar", 4),
    ("Weretiger", 4),
    // CR 5
    ("Air Elemental", 5),
    ("Barbed Devil", 5),
    ("Earth Elemental", 5),
    ("Fire Elemental", 5),
    ("Flesh Golem", 5),
    ("Giant Crocodile", 5),
    ("Gorgon", 5),
    ("Hill Giant", 5),
    ("Night Hag", 5),
    ("Otyugh", 5),
    ("Roper", 5),
    ("Salamander", 5),
    ("Shambling Mound", 5),
    ("Triceratops", 5),
    ("Troll", 5),
    ("Unicorn", 5),
    ("Vampire Spawn", 5),
    ("Water Elemental", 5),
    ("Wraith", 5),
    ("Xorn", 5),
    // CR 6
    ("Chimera", 6),
    ("Cyclops Sentry", 6),
    ("Drider", 6),
    ("Invisible Stalker", 6),
    ("Mage", 6),
    ("Medusa", 6),
    ("Vrock", 6),
    ("Wyvern", 6),
    ("Young Brass Dragon", 6),
    ("Young White Dragon", 6),
    // CR 7
    ("Giant Ape", 7),
    ("Oni", 7),
    ("Shield Guardian", 7),
    ("Stone Giant", 7),
    ("Young Black Dragon", 7),
    ("Young Copper Dragon", 7),
    // CR 8
    ("Assassin", 8),
    ("Chain Devil", 8),
    ("Cloaker", 8),
    ("Frost Giant", 8),
    ("Hezrou", 8),
    ("Hydra", 8),
    ("Spirit Naga", 8),
    ("Tyrannosaurus Rex", 8),
    ("Young Bronze Dragon", 8),
    ("Young Green Dragon", 8),
    // CR 9
    ("Bone Devil", 9),
    ("Clay Golem", 9),
    ("Cloud Giant", 9),
    ("Fire Giant", 9),
    ("Glabrezu", 9),
    ("Treant", 9),
    ("Young Blue Dragon", 9),
    ("Young Silver Dragon", 9),
    // CR 10
    ("Aboleth", 10),
    ("Deva", 10),
    ("Guardian Naga", 10),
    ("Stone Golem", 10),
    ("Young Gold Dragon", 10),
    ("Young Red Dragon", 10),
    // CR 11
    ("Behir", 11),
    ("Djinni", 11),
    ("Efreeti", 11),
    ("Horned Devil", 11),
    ("Remorhaz", 11),
    ("Roc", 11),
    ("Sphinx of Lore", 11),
    // CR 12
    ("Arcanaloth", 12),
    ("Erinyes", 12),
    ("Archmage", 12),
    // CR 13
    ("Adult Brass Dragon", 13),
    ("Adult White Dragon", 13),
    ("Nalfeshnee", 13),
    ("Rakshasa", 13),
    ("Storm Giant", 13),
    ("Vampire", 13),
    // CR 14
    ("Adult Black Dragon", 14),
    ("Adult Copper Dragon", 14),
    ("Ice Devil", 14),
    // CR 15
    ("Adult Bronze Dragon", 15),
    ("Adult Green Dragon", 15),
    ("Mummy Lord", 15),
    ("Purple Worm", 15),
    // CR 16
    ("Adult Blue Dragon", 16),
    ("Adult Silver Dragon", 16),
    ("Iron Golem", 16),
    ("Marilith", 16),
    ("Planetar", 16),
    // CR 17
    ("Adult Gold Dragon", 17),
    ("Adult Red Dragon", 17),
    ("Dragon Turtle", 17),
    ("Sphinx of Valor", 17),
    // CR 19
    ("Balor", 19),
    // CR 20
    ("Ancient Brass Dragon", 20),
    ("Ancient White Dragon", 20),
    ("Pit Fiend", 20),
    // CR 21
    ("Ancient Black Dragon", 21),
    ("Ancient Copper Dragon", 21),
    ("Lich", 21),
    ("Solar", 21),
    // CR 22
    ("Ancient Bronze Dragon", 22),
    ("Ancient Green Dragon", 22),
    // CR 23
    ("Ancient Blue Dragon", 23),
    ("Ancient Silver Dragon", 23),
    ("Kraken", 23),
    // CR 24
    ("Ancient Gold Dragon", 24),
    ("Ancient Red Dragon", 24),
    // CR 30
    ("Tarrasque", 30),
];
