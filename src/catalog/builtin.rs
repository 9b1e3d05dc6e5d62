//! Built-in equation data
//!
//! (expression, full equation, explanation) triples per letter. Expressions
//! are LaTeX for the right-hand side only; the full equation includes the
//! letter being solved for. List order per letter is load-bearing: the daily
//! generator indexes into it by seed.

type RawEntry = (&'static str, &'static str, &'static str);

pub(super) const BUILTIN: &[(u8, &[RawEntry])] = &[
    (
        b'A',
        &[
            (
                r"\frac{dv}{dt}",
                r"a = \frac{dv}{dt}",
                "Rate of change of velocity is acceleration",
            ),
            (
                r"\frac{F}{m}",
                r"a = \frac{F}{m}",
                "From Newton's second law F = m a",
            ),
            (
                r"\frac{d\omega}{dt}",
                r"\alpha = \frac{d\omega}{dt}",
                "Angular acceleration (rate of change of angular velocity)",
            ),
            (
                r"\frac{e^2}{4\pi \epsilon_0 \hbar c}",
                r"\alpha = \frac{e^2}{4\pi \epsilon_0 \hbar c}",
                "Fine-structure constant (dimensionless fundamental constant)",
            ),
            (
                r"\frac{v^2}{r}",
                r"a_c = \frac{v^2}{r}",
                "Formula for centripetal acceleration",
            ),
            (
                r"\frac{d^2x}{dt^2}",
                r"a = \frac{d^2x}{dt^2}",
                "Second derivative of position (acceleration)",
            ),
        ],
    ),
    (
        b'B',
        &[
            (
                r"\frac{\mu_0 I}{4\pi} \oint \frac{d\vec{l} \times \vec{r}}{r^2}",
                r"\vec{B} = \frac{\mu_0 I}{4\pi} \oint \frac{d\vec{l} \times \vec{r}}{r^2}",
                "Biot-Savart Law for the magnetic field from a current",
            ),
            (
                r"2.90 \times10^{-3} \text{m} \cdot \text{K}",
                r"b = 2.90 \times10^{-3} \text{m} \cdot \text{K}",
                "Wien's constant, used to relate the temperature of a black body to the wavelength of its radiation",
            ),
            (
                r"\frac{\mu_0 I}{2 \pi r}",
                r"B = \frac{\mu_0 I}{2 \pi r}",
                "The magnetic field of an infinitely long straight wire",
            ),
        ],
    ),
    (
        b'C',
        &[
            (
                r"3.00\times10^8~\text{m/s}",
                r"c = 3.00\times10^8~\text{m/s}",
                "Speed of light in vacuum (universal constant)",
            ),
            (
                r"\frac{q}{V}",
                r"C = \frac{q}{V}",
                "Definition of capacitance (charge per potential difference)",
            ),
            (
                r"\kappa \epsilon_0 \frac{A}{d}",
                r"C = \kappa \epsilon_0 \frac{A}{d}",
                "Capacitance of a Parallel Plate Capacitor",
            ),
            (
                r"c = \sqrt{a^2 + b^2}",
                r"c = \sqrt{a^2 + b^2}",
                "Pythagorean theorem, where c represents the hypotenuse",
            ),
        ],
    ),
    (
        b'D',
        &[
            (
                r"v t",
                r"d = v t",
                "Distance traveled at constant velocity v for time t",
            ),
            (
                r"b^2 - 4 a c",
                r"D = b^2 - 4 a c",
                "Discriminant of a quadratic equation ax^2 + bx + c = 0",
            ),
            (
                r"ad - bc",
                r"D = \det \begin{bmatrix} a & b \\ c & d \end{bmatrix} = ad - bc",
                "Determinant of a 2 × 2 matrix",
            ),
        ],
    ),
    (
        b'E',
        &[
            (
                r"m c^2",
                r"E = m c^2",
                "Mass–energy equivalence from special relativity (Einstein's famous equation)",
            ),
            (
                r"hf",
                r"E = hf",
                "Energy of a photon with frequency f (Planck–Einstein relation)",
            ),
            (
                r"-\frac{13.6~\text{eV}}{n^2}",
                r"E_n = -\frac{13.6~\text{eV}}{n^2}",
                "Energy levels of the hydrogen atom (Bohr model)",
            ),
            (
                r"\lim_{n \to \infty} \left(1 + \frac{1}{n}\right)^n",
                r"e = \lim_{n \to \infty} \left(1 + \frac{1}{n}\right)^n",
                "Definition of e as the limit of a sequence",
            ),
            (
                r"\sum_{n=0}^{\infty} \frac{1}{n!}",
                r"e = \sum_{n=0}^{\infty} \frac{1}{n!}",
                "Series expansion for e",
            ),
            (
                r"1.602 \times 10^{-19}~\text{C}",
                r"e = 1.602 \times 10^{-19}~\text{C}",
                "Elementary charge (charge of a proton/electron)",
            ),
            (
                r"\sinh(1) + \cosh(1)",
                r"e = \sinh(1) + \cosh(1)",
                "Expression is equal to e",
            ),
            (r"2.71828...", r"e = 2.71828...", "Approximate value of Euler's number (e)"),
            (
                r"\sqrt{p^2 c^2 + m^2 c^4}",
                r"E = \sqrt{p^2 c^2 + m^2 c^4}",
                "Relativistic energy in terms of momentum",
            ),
        ],
    ),
    (
        b'F',
        &[
            (
                r"m a",
                r"F = m a",
                "Newton's second law (force equals mass times acceleration)",
            ),
            (
                r"G \frac{m_1 m_2}{r^2}",
                r"F = G \frac{m_1 m_2}{r^2}",
                "Newton's law of universal gravitation (force between two masses)",
            ),
            (
                r"q(\vec{E} + \vec{v} \times \vec{B})",
                r"\vec{F} = q(\vec{E} + \vec{v} \times \vec{B})",
                "Lorentz force on a charge moving in electric and magnetic fields",
            ),
            (
                r"N_A c",
                r"F = N_A c",
                "Faraday constant, which describes how much charge there is in one mol of electrons",
            ),
            (
                r"\int_{-\infty}^{\infty} f(t) e^{-i \omega t} dt",
                r"\mathcal{F}\{f(t)\} = \int_{-\infty}^{\infty} f(t) e^{-i \omega t} dt",
                "Fourier transform of function f(t)",
            ),
        ],
    ),
    (
        b'G',
        &[
            (
                r"\frac{G M_e}{R_{e}^2}",
                r"g = \frac{G M_e}{R_{e}^2}",
                "Acceleration due to gravity on earth",
            ),
            (
                r"\Delta H^{\circ} - T \Delta S^{\circ}",
                r"\Delta G^{\circ} = \Delta H^{\circ} - T \Delta S^{\circ}",
                "Change in Gibbs Free Energy",
            ),
            (
                r"6.674 \times 10^{-11} Nm^2/kg^2",
                r"G = 6.674 \times 10^{-11} Nm^2/kg^2",
                "Gravitational constant",
            ),
        ],
    ),
    (
        b'H',
        &[
            (
                r"6.626 \times 10^{-34}~\text{J s}",
                r"h = 6.626 \times 10^{-34}~\text{J s}",
                "Planck's constant, fundamental in quantum mechanics",
            ),
            (
                r"\begin{bmatrix} \frac{\partial^2 f}{\partial x^2} & \frac{\partial^2 f}{\partial x \partial y} \\ \frac{\partial^2 f}{\partial y \partial x} & \frac{\partial^2 f}{\partial y^2} \end{bmatrix}",
                r"H = \begin{bmatrix} \frac{\partial^2 f}{\partial x^2} & \frac{\partial^2 f}{\partial x \partial y} \\ \frac{\partial^2 f}{\partial y \partial x} & \frac{\partial^2 f}{\partial y^2} \end{bmatrix}",
                "Hessian matrix for a function of two variables f(x,y)",
            ),
        ],
    ),
    (
        b'I',
        &[
            (
                r"\frac{Q}{t}",
                r"I = \frac{Q}{t}",
                "Electric current as charge flow per unit time",
            ),
            (r"\int r^2\,dm", r"I = \int r^2\,dm", "Moment of inertia formula"),
            (
                r"\begin{bmatrix} 1 & 0 & 0 \\ 0 & 1 & 0 \\ 0 & 0 & 1 \end{bmatrix}",
                r"I = \begin{bmatrix} 1 & 0 & 0 \\ 0 & 1 & 0 \\ 0 & 0 & 1 \end{bmatrix}",
                "Identity matrix (3 × 3), fundamental in linear algebra",
            ),
            (
                r"e^{i\frac{\pi}{2}}",
                r"i = e^{i\frac{\pi}{2}}",
                "Complex number representation, where i is the imaginary unit",
            ),
        ],
    ),
    (
        b'J',
        &[
            (
                r"\int \textbf{F}\,dt",
                r"\vec{J} = \int \textbf{F}\,dt",
                "One of the definitions for Impulse",
            ),
            (
                r"\begin{bmatrix} \frac{\partial x}{\partial u} & \frac{\partial x}{\partial v} \\ \frac{\partial y}{\partial u} & \frac{\partial y}{\partial v} \end{bmatrix}",
                r"J = \begin{bmatrix} \frac{\partial x}{\partial u} & \frac{\partial x}{\partial v} \\ \frac{\partial y}{\partial u} & \frac{\partial y}{\partial v} \end{bmatrix}",
                "Formula for the Jacobian matrix",
            ),
            (
                r"-D \frac{d\phi}{dx}",
                r"J = -D \frac{d\phi}{dx}",
                "Fick's First Law of Diffusion",
            ),
            (
                r"\frac{d^3x}{dt^3}",
                r"j = \frac{d^3x}{dt^3}",
                "Third derivative of position (jerk)",
            ),
            (
                r"\frac{d^2v}{dt^2}",
                r"j = \frac{d^2v}{dt^2}",
                "First derivative of acceleration (jerk)",
            ),
            (
                r"\text{kg m}^2/\text{s}^2",
                r"J = \text{kg m}^2/\text{s}^2",
                "SI units for a Joule (unit of energy)",
            ),
        ],
    ),
    (
        b'K',
        &[
            (
                r"\frac{1}{2} m v^2",
                r"K = \frac{1}{2} m v^2",
                "Kinetic energy of an object in motion",
            ),
            (
                r"1.38\times10^{-23}~\text{J/K}",
                r"k_B = 1.38\times10^{-23}~\text{J/K}",
                "Boltzmann's constant (relates temperature to energy)",
            ),
            (
                r"\frac{2\pi}{\lambda}",
                r"k = \frac{2\pi}{\lambda}",
                "Wave number k (spatial frequency) for a wave of wavelength λ",
            ),
            (
                r"\frac{1}{4\pi \epsilon_0}",
                r"k = \frac{1}{4\pi \epsilon_0}",
                "Coulomb constant",
            ),
        ],
    ),
    (
        b'L',
        &[
            (
                r"\vec{r} \times \vec{p}",
                r"\vec{L} = \vec{r} \times \vec{p}",
                "Angular momentum L is the cross product of position and momentum",
            ),
            (
                r"L_0 \sqrt{1 - \frac{v^2}{c^2}}",
                r"L = L_0 \sqrt{1 - \frac{v^2}{c^2}}",
                "Length contraction (moving object's length L is shorter by this factor)",
            ),
            (
                r"\int_{0}^{\infty} e^{-st} f(t) \, dt",
                r"\mathcal{L}\{f(t)\} = \int_{0}^{\infty} e^{-st} f(t) \, dt",
                "Definition of the Laplace Transform of a function",
            ),
        ],
    ),
    (
        b'M',
        &[
            (
                r"\frac{F}{a}",
                r"M = \frac{F}{a}",
                "Mass equation derived from Newton's second law F = ma",
            ),
            (
                r"\frac{v_{esc}^2 R}{2G}",
                r"M = \frac{v_{esc}^2 R}{2G}",
                "Mass M expressed in terms of escape velocity, radius, and gravitational constant",
            ),
            (
                r"\frac{r_s c^2}{2G}",
                r"M = \frac{r_s c^2}{2G}",
                "Mass M expressed in terms of the Schwarzschild radius",
            ),
            (
                r"\frac{h}{\lambda c} \left(1 + \frac{h}{m_e c \lambda} (1 - \cos \theta) \right)",
                r"M = \frac{h}{\lambda c} \left(1 + \frac{h}{m_e c \lambda} (1 - \cos \theta) \right)",
                "Mass rearranged from the Compton scattering formula",
            ),
        ],
    ),
    (
        b'N',
        &[
            (
                r"\text{rank}(A) + \text{nullity}(A)",
                r"n = \text{rank}(A) + \text{nullity}(A)",
                "Rank-Nullity Theorem",
            ),
            (
                r"\text{kg}/(\text{m} \cdot \text{s}^2)",
                r"N = \text{kg}/(\text{m} \cdot \text{s}^2)",
                "SI units for Newtons (unit of force)",
            ),
        ],
    ),
    (
        b'O',
        &[
            (
                r"e^{i\pi} + 1",
                r"0 = e^{i\pi} + 1",
                "Euler's identity, where e^{iπ} + 1 = 0",
            ),
            (
                r"\frac{dL}{dt} - \frac{d}{dt}\left(\frac{dL}{dq}\right)",
                r"0 = \frac{dL}{dt} - \frac{d}{dt}\left(\frac{dL}{dq}\right)",
                "Euler-Lagrange equation, representing stationary action in classical mechanics",
            ),
            (
                r"\oint \vec{B} \cdot d\vec{A}",
                r"0 = \oint \vec{B} \cdot d\vec{A}",
                "Maxwell's equation (Gauss's law for magnetism in integral form), which equals zero",
            ),
            (
                r"\gamma^\mu \partial_\mu \psi - m \psi",
                r"0 = \gamma^\mu \partial_\mu \psi - m \psi",
                "Dirac equation, representing relativistic quantum mechanics",
            ),
            (
                r"\lim_{n \to \infty} \frac{n!}{n^n}",
                r"0 = \lim_{n \to \infty} \frac{n!}{n^n}",
                "Famous limit that is equal to 0",
            ),
            (
                r"\lim_{x \to 0} \frac{\cos(x) - 1}{x}",
                r"0 = \lim_{x \to 0} \frac{\cos(x) - 1}{x}",
                "Famous trig limit that is equal to 0",
            ),
        ],
    ),
    (
        b'P',
        &[
            (r"m v", r"p = m v", "Momentum defined as mass times velocity"),
            (r"I V", r"P = I V", "Electric power as current I times voltage V"),
            (
                r"\frac{dW}{dt}",
                r"P = \frac{dW}{dt}",
                "Formula for power as the amount of energy transferred per unit time",
            ),
            (
                r"\tau \omega \cos \theta",
                r"P = \tau \omega \cos \theta",
                "Rotational power equation, where torque τ and angular velocity ω contribute to power depending on angle θ",
            ),
            (
                r"\vec{F} \cdot \vec{v}",
                r"P = \vec{F} \cdot \vec{v}",
                "Formula for power, where it is equal to the dot product of force and velocity",
            ),
        ],
    ),
    (
        b'Q',
        &[
            (
                r"\int_{t_i}^{t_f} I \, dt",
                r"q = \int_{t_i}^{t_f} I \, dt",
                "The total electric charge transferred over a time",
            ),
            (
                r"m c \Delta T",
                r"Q = m c \Delta T",
                "Heat Q gained or lost by mass m with specific heat c for temperature change ΔT",
            ),
            (
                r"\epsilon_0\oint \vec{E} \cdot d\vec{A}",
                r"\epsilon_0\oint \vec{E} \cdot d\vec{A} = Q_{\text{enc}}",
                "Gauss's law (electric flux through closed surface equals enclosed charge over ε₀)",
            ),
        ],
    ),
    (
        b'R',
        &[
            (
                r"\frac{V}{I}",
                r"R = \frac{V}{I}",
                "Ohm's law (resistance R as voltage over current)",
            ),
            (
                r"\frac{\rho \ell}{A}",
                r"R = \frac{\rho \ell}{A}",
                "Resistance of a conductor with a uniform cross-sectional area",
            ),
            (
                r"8.314~\text{J/(mol K)}",
                r"R = 8.314~\text{J/(mol K)}",
                "Universal gas constant",
            ),
            (
                r"\frac{\alpha^2 m_e c^2}{2h}",
                r"R_\infty = \frac{\alpha^2 m_e c^2}{2h}",
                "Rydberg constant, used when concerning the electromagnetic spectra of an atom",
            ),
        ],
    ),
    (
        b'S',
        &[
            (
                r"k_B \ln \Omega",
                r"S = k_B \ln \Omega",
                "Boltzmann's entropy formula (S entropy, Ω number of microstates)",
            ),
            (
                r"\int_{t_1}^{t_2} \left(\frac{1}{2} m v^2(t) - mgx(t) \right) dt",
                r"S = \int_{t_1}^{t_2} \left(\frac{1}{2} m v^2(t) - mgx(t) \right) dt",
                "Action integral in classical mechanics",
            ),
        ],
    ),
    (
        b'T',
        &[
            (
                r"I \alpha",
                r"\tau = I \alpha",
                "Rotational analogue of F = m a (torque τ = moment of inertia I × angular accel. α)",
            ),
            (
                r"2\pi \sqrt{\frac{L}{g}}",
                r"T = 2\pi \sqrt{\frac{L}{g}}",
                "Period T of a simple pendulum of length L",
            ),
            (
                r"R C",
                r"\tau = R C",
                "Time constant τ of an RC circuit (R = resistance, C = capacitance)",
            ),
            (
                r"\frac{\Delta t}{\sqrt{1 - \frac{v^2}{c^2}}}",
                r"\Delta t' = \frac{\Delta t}{\sqrt{1 - \frac{v^2}{c^2}}}",
                "Time dilation (moving clocks tick slower by factor √(1 - v²/c²))",
            ),
            (
                r"2\pi \sqrt{\frac{m}{k}}",
                r"T = 2\pi \sqrt{\frac{m}{k}}",
                "Period T of a mass-spring system",
            ),
        ],
    ),
    (
        b'U',
        &[
            (
                r"m g h",
                r"U = m g h",
                "Gravitational potential energy near Earth's surface",
            ),
            (
                r"\begin{bmatrix} \gamma c \\ \gamma v_x \\ \gamma v_y \\ \gamma v_z \end{bmatrix}",
                r"\vec{U} = \begin{bmatrix} \gamma c \\ \gamma v_x \\ \gamma v_y \\ \gamma v_z \end{bmatrix}",
                "Four-velocity in special relativity, with gamma being the Lorentz factor",
            ),
            (
                r"-\frac{G M m}{r}",
                r"U = -\frac{G M m}{r}",
                "Gravitational potential energy of two masses separated by distance r",
            ),
        ],
    ),
    (
        b'V',
        &[
            (
                r"\frac{W}{q}",
                r"V = \frac{W}{q}",
                "Electric potential V as work per unit charge",
            ),
            (
                r"\frac{1}{4\pi \epsilon_0}\frac{q}{r}",
                r"V = \frac{1}{4\pi \epsilon_0}\frac{q}{r}",
                "Electric potential due to a point charge at distance r",
            ),
        ],
    ),
    (
        b'W',
        &[
            (
                r"F d \cos\theta",
                r"W = F d \cos\theta",
                "Work done by a force F over displacement d at angle θ",
            ),
            (
                r"\int_{x_i}^{x_f} F(x) \, dx",
                r"W = \int_{x_i}^{x_f} F(x) \, dx",
                "Definition of Work",
            ),
        ],
    ),
    (
        b'X',
        &[
            (
                r"\frac{-b \pm \sqrt{b^2 - 4ac}}{2a}",
                r"x = \frac{-b \pm \sqrt{b^2 - 4ac}}{2a}",
                "Quadratic formula",
            ),
            (
                r"\frac{d}{dx}\left( \frac{1}{2}x^2 \right)",
                r"x = \frac{d}{dx}\left( \frac{1}{2}x^2 \right)",
                "Derivative using power rule",
            ),
        ],
    ),
    (
        b'Y',
        &[
            (
                r"\frac{1}{Z}",
                r"Y = \frac{1}{Z}",
                "Electrical admittance (Y) as reciprocal of impedance Z",
            ),
            (
                r"A \sin(kx - \omega t)",
                r"y = A \sin(kx - \omega t)",
                "Solution to the one-dimensional wave equation",
            ),
        ],
    ),
    (
        b'Z',
        &[
            (
                r"\sum e^{-E/(k_B T)}",
                r"Z = \sum_{i} e^{-E_i/(k_B T)}",
                "Partition function Z (sum of e^(-E/(k_B T)) over states)",
            ),
            (
                r"\sqrt{R^2 + (X_L - X_C)^2}",
                r"Z = \sqrt{R^2 + (X_L - X_C)^2}",
                "Impedance magnitude in an RLC circuit",
            ),
            (
                r"\sqrt{\frac{\mu_0}{\epsilon_0}}",
                r"Z_0 = \sqrt{\frac{\mu_0}{\epsilon_0}}",
                "Impedance of free space",
            ),
        ],
    ),
];
